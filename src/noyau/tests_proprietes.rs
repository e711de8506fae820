//! Propriétés du pipeline brut -> canonique -> valeur.
//!
//! On enchaîne les trois étapes publiques séparément (pas eval_expression)
//! pour vérifier qu’elles s’accordent sur la même grammaire.

use super::{evaluate, is_well_formed, normalize, Decimal, ErreurCalcul};

fn calcule(s: &str) -> Result<Decimal, ErreurCalcul> {
    evaluate(&normalize(s)?)
}

fn calcule_ok(s: &str) -> Decimal {
    calcule(s).unwrap_or_else(|e| panic!("expr={s:?} err={e}"))
}

fn assert_valeur(s: &str, attendu: &str) {
    let attendu: Decimal = attendu.parse().unwrap();
    assert_eq!(calcule_ok(s), attendu, "expr={s:?}");
}

/* ------------------------ Valeurs de référence ------------------------ */

#[test]
fn prop_precedence() {
    assert_valeur("2+3*4", "14");
}

#[test]
fn prop_division_exacte_et_zero() {
    assert_eq!(calcule_ok("10/4").to_string(), "2.5");
    assert_eq!(calcule("5/0"), Err(ErreurCalcul::DivisionParZero));
}

#[test]
fn prop_multiplication_implicite() {
    assert_valeur("2(3)", "6");
    assert_valeur("(2)(3)", "6");
    assert_valeur("[2]{3}(4)", "24");
}

#[test]
fn prop_double_moins() {
    assert_valeur("5--3", "8");
}

#[test]
fn prop_moins_en_tete() {
    assert_valeur("-5+2", "-3");
}

#[test]
fn prop_puissance_entiere() {
    assert_eq!(calcule_ok("2^10").to_string(), "1024");
}

#[test]
fn prop_puissance_fractionnaire_approchee() {
    let r = calcule_ok("2^0.5").to_f64();
    assert!((r - 1.414_213_56).abs() < 1e-8, "r={r}");
}

#[test]
fn prop_grammaire() {
    assert!(!is_well_formed("(2+3"));
    assert!(!is_well_formed("2++3"));
    assert!(is_well_formed("2+3"));
    assert!(!is_well_formed("(2+3]"));
}

/* ------------------------ Idempotence ------------------------ */

#[test]
fn prop_normalisation_idempotente() {
    for brut in [
        "2+3*4", "10/4", "2(3)", "(2)(3)", "5--3", "-5+2", "2^10", "{1+2}[3]", "(-2)*4",
        "2*-3", "(--5)", "1.5(2)", "-(2)", "(1)-(2)", "5-(2)",
    ] {
        let une = normalize(brut).unwrap();
        let deux = normalize(&une).unwrap();
        assert_eq!(une, deux, "brut={brut:?}");
    }
}

/* ------------------------ Accord grammaire / normalisation ------------------------ */

#[test]
fn prop_bien_formee_donne_canonique_evaluable() {
    // Tout ce que la grammaire accepte ici doit traverser normalize + evaluate
    // sans erreur de structure (PileVide / ExpressionInvalide).
    for brut in [
        "2+3", "(2+3)*4", "{2}[3](4)", "-(2+3)", "(-2)^2", "2^(0-1)", "((1))", "7-(-(2))",
        "[1.5+2.5]/2", "-1--1", "3(-(2))",
    ] {
        assert!(is_well_formed(brut), "{brut:?}");
        match calcule(brut) {
            Ok(_) | Err(ErreurCalcul::DivisionParZero) => {}
            Err(e) => panic!("expr={brut:?} err={e}"),
        }
    }
}

#[test]
fn prop_valeurs_signees() {
    assert_valeur("-(2+3)", "-5");
    assert_valeur("(-2)^2", "4");
    assert_valeur("7-(-(2))", "9");
    assert_valeur("[1.5+2.5]/2", "2");
    assert_valeur("-1--1", "0");
    assert_valeur("5-(2)", "3");
    assert_valeur("(1)-(2)", "-1");
}

/* ------------------------ Exactitude (+ - * /) ------------------------ */

#[test]
fn prop_pas_de_derive_flottante() {
    assert_eq!(calcule_ok("0.1+0.2").to_string(), "0.3");
    assert_eq!(calcule_ok("1.1*1.1").to_string(), "1.21");
    assert_eq!(calcule_ok("0.3-0.1").to_string(), "0.2");
    assert_eq!(calcule_ok("1/8").to_string(), "0.125");
    assert_valeur(
        "99999999999999999999*99999999999999999999",
        "9999999999999999999800000000000000000001",
    );
}

/* ------------------------ Particularités historiques ------------------------ */

#[test]
fn prop_moins_apres_produit_historique() {
    // "2*-3" -> "2*1+0-3" : le signe ne se distribue pas
    assert_valeur("2*-3", "-1");
}

#[test]
fn prop_puissance_meme_niveau_que_produit() {
    assert_valeur("2*3^2", "36");
}
