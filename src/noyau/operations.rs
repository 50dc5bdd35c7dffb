//! Opérations numériques pures (f64 -> Result<f64>).
//!
//! Chaque fonction vérifie son domaine AVANT de calculer, puis refuse tout
//! résultat non fini : l’affichage doit toujours rester lisible.

use super::erreur::ErreurCalcul;
use super::format::est_entier;

/// Borne haute de la factorielle (au-delà : hors domaine).
pub const FACTORIELLE_MAX: u32 = 10;

/// Opérateur binaire en attente du second opérande.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
    /// x^y
    Puissance,
}

impl Operateur {
    /// Symbole affiché sur le bouton.
    pub const fn symbole(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Moins => "-",
            Self::Fois => "*",
            Self::Divise => "/",
            Self::Puissance => "x^y",
        }
    }

    /// Applique l’opérateur à (a, b).
    pub fn appliquer(self, a: f64, b: f64) -> Result<f64, ErreurCalcul> {
        let r = match self {
            Self::Plus => a + b,
            Self::Moins => a - b,
            Self::Fois => a * b,
            Self::Divise => {
                if b == 0.0 {
                    return Err(ErreurCalcul::DivisionParZero);
                }
                a / b
            }
            Self::Puissance => return puissance(a, b),
        };
        fini(r)
    }
}

fn fini(r: f64) -> Result<f64, ErreurCalcul> {
    if r.is_finite() {
        Ok(r)
    } else {
        Err(ErreurCalcul::Depassement)
    }
}

/// a^b ; base négative avec exposant fractionnaire refusée.
pub fn puissance(a: f64, b: f64) -> Result<f64, ErreurCalcul> {
    if a < 0.0 && !est_entier(b) {
        return Err(ErreurCalcul::HorsDomaine(
            "base négative et exposant fractionnaire",
        ));
    }
    fini(a.powf(b))
}

/// n! pour n entier dans [0, FACTORIELLE_MAX].
pub fn factorielle(x: f64) -> Result<f64, ErreurCalcul> {
    if !est_entier(x) {
        return Err(ErreurCalcul::HorsDomaine("factorielle d’un non-entier"));
    }
    if x < 0.0 || x > f64::from(FACTORIELLE_MAX) {
        return Err(ErreurCalcul::HorsDomaine("factorielle hors de [0, 10]"));
    }

    // 0! = 1 (produit vide)
    let n = x as u32;
    Ok((1..=n).map(u64::from).product::<u64>() as f64)
}

/// ln(x), x > 0.
pub fn logarithme(x: f64) -> Result<f64, ErreurCalcul> {
    if x <= 0.0 {
        return Err(ErreurCalcul::HorsDomaine("logarithme d’un nombre ≤ 0"));
    }
    fini(x.ln())
}

/// 1/x, x ≠ 0.
pub fn inverse(x: f64) -> Result<f64, ErreurCalcul> {
    if x == 0.0 {
        return Err(ErreurCalcul::DivisionParZero);
    }
    fini(1.0 / x)
}

/// √x, x ≥ 0.
pub fn racine(x: f64) -> Result<f64, ErreurCalcul> {
    if x < 0.0 {
        return Err(ErreurCalcul::HorsDomaine("racine d’un nombre négatif"));
    }
    fini(x.sqrt())
}
