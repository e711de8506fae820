// src/noyau/format.rs
//
// Formes texte d’un décimal (entier non mis à l’échelle + échelle).
//
// - texte_scientifique : forme canonique, sert AUSSI à l’évaluateur
//   (exposant contenant '-' ou '.' => puissance approchée)
// - texte_plain        : lecture humaine, jamais d’exposant

use num_bigint::BigInt;
use num_traits::Signed;

/// Place le point décimal dans `chiffres` (échelle > 0).
fn insere_point(chiffres: &str, echelle: usize) -> String {
    if chiffres.len() > echelle {
        let (entiere, fraction) = chiffres.split_at(chiffres.len() - echelle);
        format!("{entiere}.{fraction}")
    } else {
        format!("0.{}{chiffres}", "0".repeat(echelle - chiffres.len()))
    }
}

/// Forme canonique :
/// - échelle >= 0 et exposant ajusté >= -6 : notation simple ("12.50", "0.000001")
/// - sinon : un chiffre, point, reste, puis E±n ("1.00E+3", "1E-7")
///
/// exposant ajusté = -échelle + (nb_chiffres - 1)
pub fn texte_scientifique(valeur: &BigInt, echelle: i64) -> String {
    let chiffres = valeur.abs().to_string();
    let signe = if valeur.is_negative() { "-" } else { "" };
    let ajuste = -echelle + (chiffres.len() as i64 - 1);

    if echelle == 0 {
        return format!("{signe}{chiffres}");
    }

    if echelle > 0 && ajuste >= -6 {
        return format!("{signe}{}", insere_point(&chiffres, echelle as usize));
    }

    let (tete, queue) = chiffres.split_at(1);
    let mut out = format!("{signe}{tete}");
    if !queue.is_empty() {
        out.push('.');
        out.push_str(queue);
    }
    if ajuste != 0 {
        out.push('E');
        if ajuste > 0 {
            out.push('+');
        }
        out.push_str(&ajuste.to_string());
    }
    out
}

/// Notation simple, sans exposant.
pub fn texte_plain(valeur: &BigInt, echelle: i64) -> String {
    let chiffres = valeur.abs().to_string();
    let signe = if valeur.is_negative() { "-" } else { "" };

    if echelle <= 0 {
        if chiffres == "0" {
            return "0".to_string();
        }
        let zeros = "0".repeat(echelle.unsigned_abs() as usize);
        return format!("{signe}{chiffres}{zeros}");
    }

    format!("{signe}{}", insere_point(&chiffres, echelle as usize))
}
