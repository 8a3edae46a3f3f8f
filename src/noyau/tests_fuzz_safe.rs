//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler validateur et évaluateur sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée (la descente récursive suit l’imbrication)
//! - budget temps global
//! - invariant clé : une expression générée selon la grammaire est acceptée
//!   par le validateur ET évaluée sans faute

use std::time::{Duration, Instant};

use super::eval::evaluer_expression;
use super::validation::valider_expression;

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

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    let entier = rng.pick(100);
    if rng.coin() {
        format!("{entier}.{}", rng.pick(1000))
    } else {
        format!("{entier}")
    }
}

fn gen_fonction(rng: &mut Rng) -> &'static str {
    match rng.pick(4) {
        0 => "sin",
        1 => "cos",
        2 => "tan",
        _ => "sqrt",
    }
}

fn gen_operateur(rng: &mut Rng) -> char {
    match rng.pick(5) {
        0 => '+',
        1 => '-',
        2 => '*',
        3 => '/',
        _ => '^',
    }
}

/// Un opérande qui respecte les règles du validateur :
/// jamais d’opérateur juste après `!`, donc la factorielle est toujours close par ')'.
fn gen_operande(rng: &mut Rng, profondeur: u32) -> String {
    let choix = if profondeur == 0 { rng.pick(3) } else { rng.pick(6) };
    match choix {
        0 => gen_nombre(rng),
        // petite factorielle, bornée pour rester rapide
        1 => format!("({}!)", rng.pick(12)),
        2 => format!("{}{}", gen_fonction(rng), rng.pick(360)),
        3 => format!("({})", gen_expression(rng, profondeur - 1)),
        4 => format!(
            "{}({})",
            gen_fonction(rng),
            gen_expression(rng, profondeur - 1)
        ),
        // signe unaire : seulement juste après '(' (jamais après un opérateur)
        _ => format!("(-({}))", gen_expression(rng, profondeur - 1)),
    }
}

fn gen_expression(rng: &mut Rng, profondeur: u32) -> String {
    let mut s = gen_operande(rng, profondeur);
    for _ in 0..rng.pick(4) {
        s.push(gen_operateur(rng));
        s.push_str(&gen_operande(rng, profondeur));
    }
    s
}

/// Bruit : caractères pris dans l’alphabet du validateur + quelques intrus.
fn gen_bruit(rng: &mut Rng) -> String {
    const ALPHABET: &[char] = &[
        '0', '1', '2', '9', '.', '(', ')', '+', '-', '*', '/', '^', '!', 's', 'i', 'n', 'q', 'r',
        't', ' ', '#', 'é',
    ];
    let len = rng.pick(24);
    (0..len)
        .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
        .collect()
}

/* ------------------------ Campagnes ------------------------ */

#[test]
fn fuzz_grammaire_acceptee_et_evaluee() {
    let start = Instant::now();
    let max = Duration::from_secs(5);
    let mut rng = Rng::new(0x5EED_CA1C);

    for _ in 0..2_000 {
        budget(start, max);
        let expr = gen_expression(&mut rng, 3);

        assert!(valider_expression(&expr), "devrait être accepté: {expr:?}");
        if let Err(e) = evaluer_expression(&expr) {
            panic!("faute sur une expression validée: {expr:?} -> {e}");
        }
    }
}

#[test]
fn fuzz_bruit_sans_panique() {
    let start = Instant::now();
    let max = Duration::from_secs(5);
    let mut rng = Rng::new(42);

    for _ in 0..5_000 {
        budget(start, max);
        let s = gen_bruit(&mut rng);

        // totalité : aucune panique, quelle que soit l’entrée
        let _ = valider_expression(&s);
        let _ = evaluer_expression(&s);
    }
}

#[test]
fn fuzz_deterministe() {
    let mut a = Rng::new(7);
    let mut b = Rng::new(7);

    for _ in 0..200 {
        let ea = gen_expression(&mut a, 2);
        let eb = gen_expression(&mut b, 2);
        assert_eq!(ea, eb);

        let va = evaluer_expression(&ea).expect("évaluable");
        let vb = evaluer_expression(&eb).expect("évaluable");
        assert_eq!(va.to_bits(), vb.to_bits(), "expr={ea:?}");
    }
}
