// src/noyau/decimal.rs
//
// Décimal à précision arbitraire : valeur = entier × 10^(-échelle)
//
// - addition / soustraction / multiplication : exactes
// - division : `precision` chiffres significatifs, arrondi au pair (demi-pair)
//   si le quotient exact est plus court, on retire les zéros finaux jusqu’à
//   l’échelle préférée (échelle(a) - échelle(b))
// - puissance entière : exacte
// - f64 : lecture approchée (aller-retour par le texte)
//
// L’échelle fait partie de la valeur affichée ("2.50" ≠ "2.5" en texte),
// mais l’égalité et l’ordre sont numériques.

use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::erreur::ErreurCalcul;
use super::format::{texte_plain, texte_scientifique};

#[derive(Clone, Debug)]
pub struct Decimal {
    valeur: BigInt,
    echelle: i64,
}

/* ------------------------ Helpers entiers ------------------------ */

fn pow10(n: u64) -> BigInt {
    let mut acc = BigInt::one();
    let mut base = BigInt::from(10u32);
    let mut e = n;
    while e > 0 {
        if (e & 1) == 1 {
            acc *= &base;
        }
        e >>= 1;
        if e > 0 {
            base = &base * &base;
        }
    }
    acc
}

/// Nombre de chiffres décimaux de |x| (1 pour zéro).
fn nb_chiffres(x: &BigInt) -> i64 {
    x.abs().to_string().len() as i64
}

/// Arrondi demi-pair de `garde` sachant le reste `tombe` / `unite`.
/// `reste_cache` : il restait quelque chose après `tombe` (donc strictement > moitié si égalité).
fn arrondi_demi_pair(garde: BigInt, tombe: &BigInt, unite: &BigInt, reste_cache: bool) -> BigInt {
    let double = tombe * 2u32;
    let monte = match double.cmp(unite) {
        Ordering::Greater => true,
        Ordering::Less => false,
        Ordering::Equal => reste_cache || (&garde % 2u32) == BigInt::one(),
    };
    if monte {
        garde + 1u32
    } else {
        garde
    }
}

/* ------------------------ Construction ------------------------ */

impl Decimal {
    pub fn new(valeur: BigInt, echelle: i64) -> Self {
        Self { valeur, echelle }
    }

    /// Entier non mis à l’échelle.
    pub fn unscaled(&self) -> &BigInt {
        &self.valeur
    }

    pub fn scale(&self) -> i64 {
        self.echelle
    }

    pub fn is_zero(&self) -> bool {
        self.valeur.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.valeur.is_negative()
    }

    /// Forme décimale sans exposant ("1000" plutôt que "1E+3").
    pub fn to_plain_string(&self) -> String {
        texte_plain(&self.valeur, self.echelle)
    }

    /// Lecture approchée en f64 (inf si hors domaine).
    pub fn to_f64(&self) -> f64 {
        format!("{}e{}", self.valeur, -self.echelle)
            .parse::<f64>()
            .unwrap_or(f64::NAN)
    }

    /// f64 -> Decimal via sa forme texte la plus courte.
    /// NaN / ±inf n’ont pas de forme décimale.
    pub fn from_f64(x: f64) -> Result<Self, ErreurCalcul> {
        if !x.is_finite() {
            return Err(ErreurCalcul::FormatNombre(format!("{x}")));
        }
        format!("{x:?}").parse()
    }

    /// Valeur entière exacte, None s’il reste une partie fractionnaire.
    pub fn entier_exact(&self) -> Option<BigInt> {
        if self.echelle <= 0 {
            return Some(&self.valeur * pow10(self.echelle.unsigned_abs()));
        }
        let unite = pow10(self.echelle as u64);
        if (&self.valeur % &unite).is_zero() {
            Some(&self.valeur / unite)
        } else {
            None
        }
    }

    /// Entier mis à l’échelle `echelle` (>= self.echelle).
    fn aligne(&self, echelle: i64) -> BigInt {
        let ecart = (echelle - self.echelle) as u64;
        &self.valeur * pow10(ecart)
    }
}

impl From<i64> for Decimal {
    fn from(n: i64) -> Self {
        Self::new(BigInt::from(n), 0)
    }
}

/* ------------------------ Arithmétique ------------------------ */

impl Decimal {
    pub fn ajoute(&self, autre: &Decimal) -> Decimal {
        let e = self.echelle.max(autre.echelle);
        Decimal::new(self.aligne(e) + autre.aligne(e), e)
    }

    pub fn soustrait(&self, autre: &Decimal) -> Decimal {
        let e = self.echelle.max(autre.echelle);
        Decimal::new(self.aligne(e) - autre.aligne(e), e)
    }

    pub fn multiplie(&self, autre: &Decimal) -> Decimal {
        Decimal::new(&self.valeur * &autre.valeur, self.echelle + autre.echelle)
    }

    /// self / diviseur, arrondi demi-pair à `precision` chiffres significatifs.
    pub fn divise(&self, diviseur: &Decimal, precision: usize) -> Result<Decimal, ErreurCalcul> {
        if diviseur.is_zero() {
            return Err(ErreurCalcul::DivisionParZero);
        }

        let preferee = self.echelle - diviseur.echelle;
        if self.is_zero() {
            return Ok(Decimal::new(BigInt::zero(), preferee));
        }

        let p = precision.max(1) as i64;
        let negatif = self.is_negative() != diviseur.is_negative();
        let num = self.valeur.abs();
        let den = diviseur.valeur.abs();

        // k choisi pour que num*10^k/den ait p+1 ou p+2 chiffres
        let k = p - (nb_chiffres(&num) - nb_chiffres(&den)) + 1;
        let (n2, d2) = if k >= 0 {
            (num * pow10(k as u64), den)
        } else {
            (num, den * pow10(k.unsigned_abs()))
        };

        let mut q = &n2 / &d2;
        let reste_non_nul = !(&n2 % &d2).is_zero();
        let mut echelle = preferee + k;
        let mut inexact = reste_non_nul;

        let chiffres = nb_chiffres(&q);
        if chiffres > p {
            let retire = (chiffres - p) as u64;
            let unite = pow10(retire);
            let garde = &q / &unite;
            let tombe = &q % &unite;
            inexact = inexact || !tombe.is_zero();
            q = arrondi_demi_pair(garde, &tombe, &unite, reste_non_nul);
            echelle -= retire as i64;

            // retenue : 99..9 -> 100..0
            if nb_chiffres(&q) > p {
                q /= 10u32;
                echelle -= 1;
            }
        }

        if !inexact {
            let dix = BigInt::from(10u32);
            while echelle > preferee && (&q % &dix).is_zero() {
                q /= 10u32;
                echelle -= 1;
            }
        }

        if negatif {
            q = -q;
        }
        Ok(Decimal::new(q, echelle))
    }

    /// self^n exact (échelle × n).
    pub fn puissance(&self, n: u32) -> Decimal {
        Decimal::new(self.valeur.pow(n), self.echelle * i64::from(n))
    }
}

/* ------------------------ Texte ------------------------ */

impl FromStr for Decimal {
    type Err = ErreurCalcul;

    /// Accepte : [signe] chiffres [. chiffres] [e|E [signe] chiffres]
    /// ".5" et "5." sont acceptés, "." et "1.2.3" non.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let erreur = || ErreurCalcul::FormatNombre(s.to_string());

        let (mantisse, exposant) = match s.find(|c: char| c == 'e' || c == 'E') {
            Some(pos) => {
                let e = s[pos + 1..].parse::<i64>().map_err(|_| erreur())?;
                (&s[..pos], e)
            }
            None => (s, 0),
        };

        let (negatif, corps) = match mantisse.strip_prefix('-') {
            Some(reste) => (true, reste),
            None => (false, mantisse.strip_prefix('+').unwrap_or(mantisse)),
        };

        let (entiere, fraction) = corps.split_once('.').unwrap_or((corps, ""));
        if entiere.is_empty() && fraction.is_empty() {
            return Err(erreur());
        }
        let que_des_chiffres = |t: &str| t.chars().all(|c| c.is_ascii_digit());
        if !que_des_chiffres(entiere) || !que_des_chiffres(fraction) {
            return Err(erreur());
        }

        let chiffres = format!("{entiere}{fraction}");
        let mut valeur = BigInt::parse_bytes(chiffres.as_bytes(), 10).ok_or_else(erreur)?;
        if negatif {
            valeur = -valeur;
        }

        let echelle = (fraction.len() as i64)
            .checked_sub(exposant)
            .ok_or_else(erreur)?;

        Ok(Decimal::new(valeur, echelle))
    }
}

impl fmt::Display for Decimal {
    /// Forme canonique : notation scientifique quand l’échelle est négative
    /// ou que l’exposant ajusté descend sous -6.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&texte_scientifique(&self.valeur, self.echelle))
    }
}

/* ------------------------ Égalité / ordre numériques ------------------------ */

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Decimal {}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        let e = self.echelle.max(other.echelle);
        self.aligne(e).cmp(&other.aligne(e))
    }
}
