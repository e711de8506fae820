// src/noyau/canon.rs
//
// Normalisation : texte brut -> expression canonique (seule entrée de l’évaluateur).
//
// Étapes, dans l’ordre :
// 1) parenthèses {} [] () -> ( ) génériques
// 2) paires vides "()" retirées jusqu’au point fixe (crochets.rs)
// 3) multiplication implicite : ")2" ")(" "2(" -> ")*2" ")*(" "2*("
// 4) signes : "--" -> "+" (ou rien en tête / "(--(" / "(--2"), "+-" -> "-"
// 5) moins unaire -> binaire :
//      début, après '+', contre '(' (des deux côtés) -> "0-"
//      (après un chiffre ou un point, le moins est déjà binaire : "5-(2)" reste tel quel)
//      après ')'                                      -> "+0-"
//      après '*' ou '/'                               -> "1+0-"
// 6) espaces retirés à l’assemblage
//
// NOTE: "1+0-" après '*' ou '/' ne distribue PAS le signe sur le facteur
// précédent ("2*-3" -> "2*1+0-3" = -1). Comportement historique conservé.

use log::trace;

use super::crochets::reduit_crochets_vides;
use super::erreur::ErreurCalcul;
use super::jetons::{generique, is_close_bracket, is_decimal_point, is_digit, is_open_bracket};

/// Caractère à l’indice `i`, erreur si le balayage sort de l’expression.
fn lit(c: &[char], i: usize) -> Result<char, ErreurCalcul> {
    c.get(i).copied().ok_or_else(|| {
        ErreurCalcul::ExpressionInvalide("balayage hors de l’expression".into())
    })
}

/// Réécriture d’un moins isolé selon ses voisins.
fn reecrit_moins(precedent: Option<char>, suivant: char) -> &'static str {
    match precedent {
        Some(p) if is_close_bracket(p) => "+0-",
        Some('*') | Some('/') => "1+0-",
        None => "0-",
        Some(p) if is_digit(p) || is_decimal_point(p) => "-",
        Some(p) if p == '+' || is_open_bracket(p) || is_open_bracket(suivant) => "0-",
        Some(_) => "-",
    }
}

/// Texte brut -> expression canonique.
///
/// Erreur `ExpressionInvalide` si la structure des parenthèses fait sortir
/// le balayage de l’expression (ex: "5(" ou "(--").
pub fn normalize(raw: &str) -> Result<String, ErreurCalcul> {
    let generiques: Vec<char> = raw.chars().map(generique).collect();
    let c = reduit_crochets_vides(&generiques)?;
    let n = c.len();

    let mut morceaux: Vec<String> = Vec::with_capacity(n + n / 2);
    let mut i = 0usize;

    while i < n {
        let ch = c[i];
        morceaux.push(ch.to_string());

        if i + 1 < n {
            let suivant = c[i + 1];

            // multiplication implicite
            if is_close_bracket(ch) && is_digit(suivant) {
                morceaux.push("*".into());
            }
            if is_close_bracket(ch) && is_open_bracket(suivant) {
                morceaux.push("*".into());
            }
            if is_digit(ch) && is_open_bracket(suivant) {
                morceaux.push("*".into());
            }

            // "--" : "+" ou rien
            if ch == '-' && suivant == '-' {
                morceaux.pop();
                let supprime = i == 0
                    || (is_open_bracket(c[i - 1]) && {
                        let apres = lit(&c, i + 2)?;
                        is_open_bracket(apres) || is_digit(apres)
                    });
                if !supprime {
                    morceaux.push("+".into());
                }
                i += 2;
                continue;
            }

            // "+-" : "-"
            if ch == '+' && suivant == '-' {
                morceaux.pop();
                morceaux.push("-".into());
                i += 2;
                continue;
            }

            if ch == '-' {
                let precedent = if i == 0 { None } else { Some(c[i - 1]) };
                let forme = reecrit_moins(precedent, suivant);
                if forme != "-" {
                    morceaux.pop();
                    morceaux.push(forme.into());
                }
            }
        }

        i += 1;
    }

    let canonique: String = morceaux
        .iter()
        .filter(|m| !m.chars().all(char::is_whitespace))
        .map(String::as_str)
        .collect();

    trace!("normalize: {raw:?} -> {canonique:?}");
    Ok(canonique)
}
