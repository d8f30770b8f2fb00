// src/scoring/mod.rs
//
// The pure logic behind the HTTP handlers: attempt shuffling/scoring,
// resume text heuristics, and the readiness composite. Everything here is
// deterministic given its inputs (shuffling takes an injected Rng).

pub mod attempt;
pub mod readiness;
pub mod resume;
