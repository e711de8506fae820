// src/noyau/evaluateur.rs
//
// Évaluation à deux piles (opérandes / opérateurs), réduction immédiate.
// Entrée : expression CANONIQUE (voir canon.rs). Aucune vérification
// d’équilibre ici : une parenthèse ou une opérande manquante => PileVide.
//
// Précédence :
// - '^' '*' '/' : même niveau (2)
// - '+' '-'     : niveau 1
// - parenthèse  : barrière
// Égalité => on réduit (associativité à gauche).
//
// NOTE: '^' partage le niveau de '*' et '/' : "2*3^2" = (2*3)^2 = 36.
// Comportement historique conservé.

use log::trace;
use num_traits::ToPrimitive;

use super::decimal::Decimal;
use super::erreur::ErreurCalcul;
use super::jetons::{is_close_bracket, is_decimal_point, is_digit, is_open_bracket, is_operator};
use super::reglages::Reglages;

fn precedence(op: char) -> u8 {
    match op {
        '+' | '-' => 1,
        '*' | '/' | '^' => 2,
        _ => 0,
    }
}

/// Faut-il réduire le sommet `sommet` avant d’empiler `op` ?
fn doit_reduire(op: char, sommet: char) -> bool {
    if is_open_bracket(sommet) || is_close_bracket(sommet) {
        return false;
    }
    precedence(sommet) >= precedence(op)
}

/// Puissance :
/// - exposant dont le texte contient '-' ou '.' : f64::powf (approché)
/// - sinon : puissance entière exacte, bornée par `exposant_max`
fn puissance(base: &Decimal, exposant: &Decimal, reglages: &Reglages) -> Result<Decimal, ErreurCalcul> {
    let texte = exposant.to_string();

    if texte.contains('-') || texte.contains('.') {
        let approx = base.to_f64().powf(exposant.to_f64());
        trace!("puissance approchée: {base}^{texte} ≈ {approx}");
        return Decimal::from_f64(approx);
    }

    let n = exposant
        .entier_exact()
        .and_then(|n| n.to_u32())
        .filter(|&n| n <= reglages.exposant_max)
        .ok_or(ErreurCalcul::ExposantTropGrand(texte))?;

    Ok(base.puissance(n))
}

/// apply(op, droite, gauche) : gauche `op` droite.
fn applique(op: char, droite: &Decimal, gauche: &Decimal, reglages: &Reglages) -> Result<Decimal, ErreurCalcul> {
    match op {
        '+' => Ok(gauche.ajoute(droite)),
        '-' => Ok(gauche.soustrait(droite)),
        '*' => Ok(gauche.multiplie(droite)),
        '/' => gauche.divise(droite, reglages.precision),
        '^' => puissance(gauche, droite, reglages),
        _ => unreachable!("opérateur inconnu sur la pile: {op:?}"),
    }
}

/// Dépile deux opérandes, applique `op`, rempile le résultat.
fn reduit(op: char, operandes: &mut Vec<Decimal>, reglages: &Reglages) -> Result<(), ErreurCalcul> {
    let droite = operandes.pop().ok_or(ErreurCalcul::PileVide)?;
    let gauche = operandes.pop().ok_or(ErreurCalcul::PileVide)?;
    let r = applique(op, &droite, &gauche, reglages)?;
    trace!("réduction: {gauche} {op} {droite} = {r}");
    operandes.push(r);
    Ok(())
}

/// Évalue une expression canonique avec les réglages par défaut.
pub fn evaluate(expression: &str) -> Result<Decimal, ErreurCalcul> {
    evaluate_avec(expression, &Reglages::default())
}

/// Évalue une expression canonique.
///
/// Les caractères hors classes (espaces) sont ignorés.
pub fn evaluate_avec(expression: &str, reglages: &Reglages) -> Result<Decimal, ErreurCalcul> {
    let chars: Vec<char> = expression.chars().collect();
    let n = chars.len();

    let mut operandes: Vec<Decimal> = Vec::new();
    let mut operateurs: Vec<char> = Vec::new();
    let mut i = 0usize;

    while i < n {
        let c = chars[i];

        // littéral : suite maximale de chiffres et de points
        if is_digit(c) || is_decimal_point(c) {
            let debut = i;
            while i < n && (is_digit(chars[i]) || is_decimal_point(chars[i])) {
                i += 1;
            }
            let litteral: String = chars[debut..i].iter().collect();
            operandes.push(litteral.parse()?);
            continue;
        }

        if is_open_bracket(c) {
            operateurs.push(c);
        } else if is_close_bracket(c) {
            // dépile jusqu’à '('
            loop {
                match operateurs.pop() {
                    None => return Err(ErreurCalcul::PileVide),
                    Some(top) if is_open_bracket(top) => break,
                    Some(top) => reduit(top, &mut operandes, reglages)?,
                }
            }
        } else if is_operator(c) {
            while let Some(&top) = operateurs.last() {
                if !doit_reduire(c, top) {
                    break;
                }
                operateurs.pop();
                reduit(top, &mut operandes, reglages)?;
            }
            operateurs.push(c);
        }

        i += 1;
    }

    // vide la pile ops
    while let Some(op) = operateurs.pop() {
        if is_open_bracket(op) {
            return Err(ErreurCalcul::PileVide);
        }
        reduit(op, &mut operandes, reglages)?;
    }

    let resultat = operandes.pop().ok_or(ErreurCalcul::PileVide)?;
    if !operandes.is_empty() {
        return Err(ErreurCalcul::PileVide);
    }
    Ok(resultat)
}
