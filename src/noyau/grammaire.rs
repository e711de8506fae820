// src/noyau/grammaire.rs
//
// Validation de la grammaire implicite sur le texte BRUT (avant normalisation).
// Répond par un booléen, ne panique jamais.
//
// Boucle explicite : indice + pile des types de parenthèses attendus + drapeau.
// Le drapeau part de `false` : une entrée vide n’est pas bien formée,
// "()" l’est (la fermeture valide l’expression).
//
// Particularités conservées telles quelles :
// - rien ne contraint ce qui PRÉCÈDE un point décimal (".5" passe, "1..2" aussi)
// - '-' est permissif : seuls '/', '*', '+' lui sont interdits juste après

use super::jetons::{
    brackets_match, is_close_bracket, is_decimal_point, is_digit, is_open_bracket, is_operator,
    Crochet,
};

fn caractere_connu(c: char) -> bool {
    is_digit(c) || is_decimal_point(c) || is_operator(c) || is_open_bracket(c) || is_close_bracket(c)
}

/// Vrai si `raw` respecte la grammaire (parenthèses appariées par type exact).
pub fn is_well_formed(raw: &str) -> bool {
    let c: Vec<char> = raw.chars().collect();
    let n = c.len();

    let mut attendus: Vec<Crochet> = Vec::new();
    let mut valide = false;
    let mut i = 0usize;

    while i < n {
        let ch = c[i];
        let precedent = if i == 0 { None } else { Some(c[i - 1]) };
        let suivant = c.get(i + 1).copied();

        if !caractere_connu(ch) {
            return false;
        }

        if is_decimal_point(ch) {
            match suivant {
                None => return false,
                Some(s) if is_operator(s) || is_open_bracket(s) || is_close_bracket(s) => {
                    return false
                }
                Some(_) => valide = true,
            }
        } else if let Some(type_ouvrant) = Crochet::ouvrant(ch) {
            attendus.push(type_ouvrant);
        } else if is_close_bracket(ch) {
            match attendus.last() {
                None => return false,
                Some(&attendu) if !brackets_match(attendu.ouvrante(), ch) => return false,
                Some(_) => {
                    attendus.pop();
                    valide = true;
                }
            }
        } else if ch == '-' {
            match suivant {
                None | Some('/') | Some('*') | Some('+') => return false,
                Some(_) => valide = true,
            }
        } else if is_operator(ch) {
            let (p, s) = match (precedent, suivant) {
                (Some(p), Some(s)) => (p, s),
                // en tête ou en fin
                _ => return false,
            };
            if is_operator(s) && s != '-' {
                return false;
            }
            if is_open_bracket(p) && is_digit(s) {
                return false;
            }
            if is_close_bracket(s) && is_digit(p) {
                return false;
            }
            valide = true;
        } else {
            valide = true;
        }

        i += 1;
    }

    attendus.is_empty() && valide
}
