//! Tests fuzz safe : robustesse + exactitude + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - oracle exact (rationnels) pour + - * et / par 2, 4, 5, 8
//! - invariant clé : la grammaire ne panique jamais, et ce qu’elle accepte
//!   traverse normalize + evaluate sans panique

use std::time::{Duration, Instant};

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, Zero};

use super::{evaluate, evaluate_avec, is_well_formed, normalize, Decimal, ErreurCalcul, Reglages};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Oracle ------------------------ */

fn rat(n: i64) -> BigRational {
    BigRational::from_integer(BigInt::from(n))
}

fn vers_rationnel(d: &Decimal) -> BigRational {
    let e = d.scale();
    if e >= 0 {
        BigRational::new(d.unscaled().clone(), BigInt::from(10).pow(e as u32))
    } else {
        BigRational::from_integer(d.unscaled() * BigInt::from(10).pow((-e) as u32))
    }
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

/// Paire de parenthèses au hasard parmi () {} [].
fn entoure(rng: &mut Rng, dedans: &str) -> String {
    match rng.pick(3) {
        0 => format!("({dedans})"),
        1 => format!("{{{dedans}}}"),
        _ => format!("[{dedans}]"),
    }
}

fn gen_atome(rng: &mut Rng) -> (String, BigRational) {
    let k = rng.pick(10) as i64;
    match rng.pick(4) {
        // entier
        0 | 1 => (format!("{k}"), rat(k)),
        // décimal k.5
        2 => (format!("{k}.5"), rat(k) + BigRational::new(BigInt::from(1), BigInt::from(2))),
        // négatif entre parenthèses
        _ => {
            let k = k.max(1);
            (entoure(rng, &format!("-{k}")), rat(-k))
        }
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> (String, BigRational) {
    if depth == 0 {
        return gen_atome(rng);
    }

    match rng.pick(6) {
        0 => gen_atome(rng),
        1 => {
            let (a, va) = gen_expr(rng, depth - 1);
            let (b, vb) = gen_expr(rng, depth - 1);
            (entoure(rng, &format!("{a}+{b}")), va + vb)
        }
        2 => {
            let (a, va) = gen_expr(rng, depth - 1);
            let (b, vb) = gen_expr(rng, depth - 1);
            (entoure(rng, &format!("{a}-{b}")), va - vb)
        }
        3 => {
            let (a, va) = gen_expr(rng, depth - 1);
            let (b, vb) = gen_expr(rng, depth - 1);
            if rng.coin() {
                (entoure(rng, &format!("{a}*{b}")), va * vb)
            } else {
                // multiplication implicite
                let ga = entoure(rng, &a);
                let gb = entoure(rng, &b);
                (format!("{ga}{gb}"), va * vb)
            }
        }
        4 => {
            let (a, va) = gen_expr(rng, depth - 1);
            let d = [2i64, 4, 5, 8][rng.pick(4) as usize];
            (entoure(rng, &format!("{a}/{d}")), va / rat(d))
        }
        _ => {
            // moins unaire devant un groupe
            let (a, va) = gen_expr(rng, depth - 1);
            let g = entoure(rng, &a);
            (entoure(rng, &format!("-{g}")), -va)
        }
    }
}

/// Chaîne brute quelconque sur l’alphabet de la grammaire (+ un intrus).
fn gen_brut(rng: &mut Rng, len: usize) -> String {
    const ALPHABET: &[char] = &[
        '0', '1', '2', '3', '7', '9', '.', '+', '-', '*', '/', '^', '(', ')', '{', '}', '[', ']',
        ' ',
    ];
    (0..len)
        .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
        .collect()
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_exactitude_oracle_rationnel() {
    let t0 = Instant::now();
    let max = Duration::from_millis(1500);

    // assez de chiffres pour que toute division par 2, 4, 5, 8 reste exacte
    let reglages = Reglages::default().avec_precision(100);
    let mut rng = Rng::new(0xC0FFEE_u64);

    for _ in 0..300 {
        budget(t0, max);

        let (expr, attendu) = gen_expr(&mut rng, 4);
        assert!(is_well_formed(&expr), "grammaire refuse: {expr:?}");

        let canon = normalize(&expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"));
        let valeur = evaluate_avec(&canon, &reglages)
            .unwrap_or_else(|e| panic!("expr={expr:?} canon={canon:?} err={e}"));

        assert_eq!(
            vers_rationnel(&valeur),
            attendu,
            "expr={expr:?} canon={canon:?} valeur={valeur}"
        );
    }
}

#[test]
fn fuzz_safe_determinisme() {
    let mut a = Rng::new(0xBADC0DE_u64);
    let mut b = Rng::new(0xBADC0DE_u64);

    for _ in 0..50 {
        let (ea, _) = gen_expr(&mut a, 3);
        let (eb, _) = gen_expr(&mut b, 3);
        assert_eq!(ea, eb);

        let ca = normalize(&ea).unwrap();
        assert_eq!(evaluate(&ca), evaluate(&normalize(&eb).unwrap()));
    }
}

#[test]
fn fuzz_safe_brut_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(1500);

    // exposant exact borné : les chaînes "9^9^9^9" restent petites
    let reglages = Reglages::default().avec_exposant_max(3);
    let mut rng = Rng::new(0x5EED_u64);

    let mut vues_bien_formees = 0usize;

    for _ in 0..2000 {
        budget(t0, max);

        let len = 1 + rng.pick(14) as usize;
        let brut = gen_brut(&mut rng, len);

        // ne doit jamais paniquer, quel que soit le texte
        if !is_well_formed(&brut) {
            // normalize non plus (erreur possible, jamais de panique)
            let _ = normalize(&brut);
            continue;
        }
        vues_bien_formees += 1;

        match normalize(&brut).and_then(|c| evaluate_avec(&c, &reglages)) {
            Ok(v) => {
                // résultat affichable dans les deux formes
                assert!(!v.to_string().is_empty());
                assert!(!v.to_plain_string().is_empty());
            }
            Err(
                ErreurCalcul::DivisionParZero
                | ErreurCalcul::ExposantTropGrand(_)
                | ErreurCalcul::FormatNombre(_)
                | ErreurCalcul::PileVide
                | ErreurCalcul::ExpressionInvalide(_),
            ) => {}
            Err(e) => panic!("erreur non attendue: brut={brut:?} err={e}"),
        }
    }

    assert!(vues_bien_formees > 20, "fuzz trop “sage”: {vues_bien_formees}");
}

#[test]
fn fuzz_safe_parentheses_profondes_anti_pile() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let n = 20_000;
    let expr = format!("{}7{}", "(".repeat(n), ")".repeat(n));
    assert!(is_well_formed(&expr));

    let vides = format!("3{}", "[]".repeat(n));
    assert!(is_well_formed(&vides));
    assert_eq!(normalize(&vides).unwrap(), "3");

    let v = evaluate(&normalize(&expr).unwrap()).unwrap();
    budget(t0, max);
    assert_eq!(v, Decimal::from(7));
}

#[test]
fn fuzz_safe_somme_longue() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    // 0.1 + 0.1 + ... (1000 fois) = 100 exactement
    let expr = vec!["0.1"; 1000].join("+");
    let v = evaluate(&normalize(&expr).unwrap()).unwrap();
    budget(t0, max);

    assert_eq!(v, Decimal::from(100));
    assert!(!vers_rationnel(&v).is_negative());
    assert!(!vers_rationnel(&v).is_zero());
}
