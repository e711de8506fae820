//! Noyau : évaluation (pipeline réel)
//!
//! brut -> trim -> grammaire (garde) -> normalisation -> évaluation -> Décimal
//!
//! Les espaces intérieurs ne sont pas retirés : "2 3" est refusé par la
//! grammaire au lieu d’être lu comme 23.
//!
//! Chaque étape reste appelable seule (is_well_formed / normalize / evaluate) ;
//! ce module les enchaîne et garde la démarche pour l’affichage.

use log::{debug, warn};

use super::canon::normalize;
use super::decimal::Decimal;
use super::erreur::ErreurCalcul;
use super::evaluateur::evaluate_avec;
use super::grammaire::is_well_formed;
use super::reglages::Reglages;

#[derive(Default, Clone, Debug)]
pub struct DemarcheNoyau {
    pub brute: String,
    pub canonique: String,
    pub resultat: String,
    pub lecture: String,
    pub note: String,
}

/// API publique : évalue une expression brute et retourne:
/// - la valeur décimale
/// - la démarche (brute, canonique, résultat, lecture simple)
pub fn eval_expression(
    expr_str: &str,
    reglages: &Reglages,
) -> Result<(Decimal, DemarcheNoyau), ErreurCalcul> {
    let s = expr_str.trim();
    if s.is_empty() {
        return Err(ErreurCalcul::EntreeVide);
    }

    let brute = s.to_string();

    // 1) Garde
    if !is_well_formed(&brute) {
        warn!("expression refusée par la grammaire: {brute:?}");
        return Err(ErreurCalcul::ExpressionMalFormee);
    }

    // 2) Forme canonique
    let canonique = normalize(&brute)?;
    debug!("canonique: {brute:?} -> {canonique:?}");

    // 3) Valeur
    let valeur = evaluate_avec(&canonique, reglages)?;
    debug!("valeur: {canonique:?} = {valeur}");

    let d = DemarcheNoyau {
        resultat: valeur.to_string(),
        lecture: valeur.to_plain_string(),
        note: format!(
            "Pipeline: grammaire → forme canonique → deux piles ({} chiffres en division).",
            reglages.precision
        ),
        brute,
        canonique,
    };

    Ok((valeur, d))
}
