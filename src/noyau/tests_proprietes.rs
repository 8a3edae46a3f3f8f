//! Tests de propriétés : cas de référence + invariants du pipeline.
//!
//! - valider puis évaluer, comme le fait l’UI
//! - idempotence (aucun état caché entre deux appels)
//! - aller-retour historique : "<expr> = <valeur>" redonne <expr>

use super::eval::evaluer_expression;
use super::validation::valider_expression;
use super::{calculer, expression_de, Historique};

const EPS: f64 = 1e-9;

fn calc_ok(expr: &str) -> f64 {
    calculer(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

/* ------------------------ Cas de référence ------------------------ */

#[test]
fn prop_refus_de_reference() {
    for expr in ["(1+2", "1+2)", "sin+1", "abc"] {
        assert!(!valider_expression(expr), "expr={expr:?}");
    }
}

#[test]
fn prop_valeurs_de_reference() {
    let cas: &[(&str, f64)] = &[
        ("2+3*4", 14.0),
        ("(2+3)*4", 20.0),
        ("2^3^2", 512.0),
        ("5!", 120.0),
        ("0!", 1.0),
        ("-1!", 1.0),
        ("sqrt(16)", 4.0),
        ("sin(90)", 1.0),
    ];
    for &(expr, attendu) in cas {
        assert!(valider_expression(expr), "devrait être accepté: {expr:?}");
        let v = calc_ok(expr);
        assert!((v - attendu).abs() < EPS, "expr={expr:?} obtenu={v} attendu={attendu}");
    }
}

/* ------------------------ Idempotence ------------------------ */

#[test]
fn prop_idempotence() {
    for expr in ["2+3*4", "sqrt(2)*cos(33.3)", "(1.5+2)^2/7", "(10!)/3"] {
        let premier = evaluer_expression(expr).expect("évaluable");
        for _ in 0..20 {
            let v = evaluer_expression(expr).expect("évaluable");
            assert_eq!(v.to_bits(), premier.to_bits(), "expr={expr:?}");
        }
    }
}

/* ------------------------ Aller-retour historique ------------------------ */

#[test]
fn prop_aller_retour_historique() {
    let mut h = Historique::default();
    let exprs = ["2+3*4", "(2+3)*4", "-1!", "sqrt(16)", "tan(45)/3", "1.25^2"];

    for expr in exprs {
        let v = calc_ok(expr);
        let ligne = h.ajouter(expr, v).to_string();
        assert_eq!(expression_de(&ligne), expr);
        // et l’expression relue se recalcule à l’identique
        assert_eq!(calc_ok(expression_de(&ligne)).to_bits(), v.to_bits());
    }

    assert_eq!(h.entrees().len(), exprs.len());
}

/* ------------------------ Cas limites ------------------------ */

#[test]
fn prop_division_par_zero_non_fautive() {
    // f64 : pas de faute, une valeur infinie ou NaN
    assert_eq!(calc_ok("1/0"), f64::INFINITY);
    assert!(calc_ok("0/0").is_nan());
}

#[test]
fn prop_pi_insere_en_texte() {
    // L’UI insère π sous forme décimale (pas de constante symbolique).
    let pi = std::f64::consts::PI.to_string();
    let expr = format!("2*{pi}");
    assert!(valider_expression(&expr));
    assert!((calc_ok(&expr) - 2.0 * std::f64::consts::PI).abs() < EPS);
}
