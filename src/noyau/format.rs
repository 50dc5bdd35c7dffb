// src/noyau/format.rs
//
// Affichage unique pour tous les résultats numériques.
//
// Chemin : f64 -> décimal le plus court (aller-retour exact) -> BigRational
//        -> arrondi au demi-pair à CHIFFRES_FRACTION_MAX -> texte sans zéros finaux.
// Jamais de notation scientifique ; un entier s’affiche sans point.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, Zero};

use super::erreur::ErreurCalcul;

/// Nombre maximal de chiffres après la virgule à l’affichage.
pub const CHIFFRES_FRACTION_MAX: usize = 23;

/// Sentinelle affichée après un calcul impossible.
pub const SENTINELLE_ERREUR: &str = "ERROR";

fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/* ------------------------ Lecture ------------------------ */

/// Lit l’affichage comme un f64.
///
/// Refuse le vide, la sentinelle et tout ce qui n’est pas un littéral décimal
/// (pas de `inf`, `NaN`, ni d’exposant).
pub fn lire_affichage(affichage: &str) -> Result<f64, ErreurCalcul> {
    let s = affichage.trim();
    let illisible = || ErreurCalcul::AffichageIllisible(affichage.to_string());

    let corps = s.strip_prefix('-').unwrap_or(s);
    if corps.is_empty()
        || !corps.chars().any(|c| c.is_ascii_digit())
        || !corps.chars().all(|c| c.is_ascii_digit() || c == '.')
    {
        return Err(illisible());
    }

    let v: f64 = s.parse().map_err(|_| illisible())?;
    if v.is_finite() {
        Ok(v)
    } else {
        Err(illisible())
    }
}

/* ------------------------ Décimal exact ------------------------ */

/// Développement décimal le plus court d’un f64 fini, converti exactement en rationnel.
fn rationnel_depuis_f64(x: f64) -> BigRational {
    // `Display` de f64 : plus court aller-retour, jamais d’exposant.
    let txt = format!("{x}");
    let (neg, corps) = match txt.strip_prefix('-') {
        Some(reste) => (true, reste),
        None => (false, txt.as_str()),
    };

    let (ent, frac) = corps.split_once('.').unwrap_or((corps, ""));
    let chiffres = format!("{ent}{frac}");
    let mut numer = BigInt::parse_bytes(chiffres.as_bytes(), 10).unwrap_or_else(BigInt::zero);
    if neg {
        numer = -numer;
    }

    BigRational::new(numer, pow10(frac.len()))
}

/// r -> round(r * 10^chiffres), arrondi au demi-pair (comme un DecimalFormat).
fn arrondi_scale(r: &BigRational, chiffres: usize) -> BigInt {
    let neg = r.is_negative();
    let abs = r.abs();

    let n = abs.numer() * pow10(chiffres);
    let d = abs.denom();
    let mut q = &n / d;
    let reste: BigInt = &n % d;

    let double = &reste * BigInt::from(2);
    let impair = (&q % BigInt::from(2)) == BigInt::from(1);
    if double > *d || (double == *d && impair) {
        q += 1u32;
    }

    if neg {
        -q
    } else {
        q
    }
}

/// Entier “scalé” (×10^chiffres) -> texte décimal, zéros finaux retirés.
fn scaled_vers_texte(mut scaled: BigInt, chiffres: usize) -> String {
    if scaled.is_zero() {
        return "0".to_string();
    }

    let neg = scaled.is_negative();
    if neg {
        scaled = -scaled;
    }

    let scale = pow10(chiffres);
    let ent = &scaled / &scale;
    let frac = &scaled % &scale;

    let mut texte = ent.to_str_radix(10);
    if !frac.is_zero() {
        let mut f = frac.to_str_radix(10);
        while f.len() < chiffres {
            f.insert(0, '0');
        }
        texte.push('.');
        texte.push_str(f.trim_end_matches('0'));
    }

    if neg {
        texte.insert(0, '-');
    }
    texte
}

/* ------------------------ API ------------------------ */

/// Formate un résultat fini pour l’affichage.
///
/// Les valeurs entières s’affichent sans point ; `-0` devient `0`.
pub fn formater_nombre(x: f64) -> String {
    debug_assert!(x.is_finite(), "formater_nombre: valeur non finie {x}");
    if !x.is_finite() {
        return SENTINELLE_ERREUR.to_string();
    }

    let r = rationnel_depuis_f64(x);
    scaled_vers_texte(arrondi_scale(&r, CHIFFRES_FRACTION_MAX), CHIFFRES_FRACTION_MAX)
}

/// Vrai si x n’a pas de partie fractionnaire.
pub fn est_entier(x: f64) -> bool {
    x.is_finite() && x.fract() == 0.0
}
