// src/noyau/erreur.rs
//
// Erreurs du noyau.
// Toutes terminales : pas de reprise, pas de résultat partiel.
// La validation (grammaire.rs) ne produit PAS d’erreur : elle répond par un booléen.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErreurCalcul {
    /// Entrée vide (après trim) donnée au pipeline.
    #[error("Entrée vide")]
    EntreeVide,

    /// Rejet par la grammaire avant toute normalisation.
    #[error("expression mal formée")]
    ExpressionMalFormee,

    /// Structure de parenthèses cassée découverte pendant la normalisation.
    #[error("expression invalide : {0}")]
    ExpressionInvalide(String),

    /// Un littéral (ou un résultat flottant) ne se lit pas comme un décimal.
    #[error("nombre invalide : {0}")]
    FormatNombre(String),

    #[error("division par zéro")]
    DivisionParZero,

    #[error("exposant trop grand : {0}")]
    ExposantTropGrand(String),

    /// Opérande ou parenthèse manquante pendant l’évaluation.
    #[error("pile vide : opérande ou parenthèse manquante")]
    PileVide,
}
