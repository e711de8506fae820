// src/noyau/crochets.rs
//
// Suppression des paires de parenthèses vides "()" jusqu’au point fixe.
//
// Itératif : une seule passe avec une pile de sortie.
// Retirer "()" puis re-balayer donne le même point fixe que la pile
// (réécriture confluente), sans profondeur d’appel liée à l’entrée.
// Ex: "(())" -> "()" -> ""   ;   "2(()())" -> "2"

use super::erreur::ErreurCalcul;
use super::jetons::{is_close_bracket, is_open_bracket};

/// Retire toutes les paires vides adjacentes.
///
/// Erreur si le point fixe se termine par une parenthèse ouvrante :
/// le balayage chercherait alors un voisin au-delà de la fin.
pub fn reduit_crochets_vides(chars: &[char]) -> Result<Vec<char>, ErreurCalcul> {
    let mut out: Vec<char> = Vec::with_capacity(chars.len());

    for &c in chars {
        if is_close_bracket(c) {
            if let Some(&top) = out.last() {
                if is_open_bracket(top) {
                    out.pop();
                    continue;
                }
            }
        }
        out.push(c);
    }

    if out.last().is_some_and(|&c| is_open_bracket(c)) {
        return Err(ErreurCalcul::ExpressionInvalide(
            "parenthèse ouvrante en fin d’expression".into(),
        ));
    }

    Ok(out)
}
