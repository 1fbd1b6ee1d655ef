// sondeo-core/src/lib.rs

#![allow(missing_docs)]
// Memory safety
#![deny(unsafe_code)]
// Robustness
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
// Performance
#![warn(clippy::perf)]

// --- MODULES HEXAGONAUX ---

// 1. Ports (Interfaces / Traits)
// Contract for artifact writers.
pub mod ports;

// 2. Domain (Cœur du métier)
// Naming, expressions, choice catalog, form model, static survey content.
// Ne dépend de RIEN d'autre (ni infra, ni app).
pub mod domain;

// 3. Infrastructure (Adapters)
// Implémentation technique (YAML config, catalog discovery, XLSX writer)
// Dépend du Domain et des Ports.
pub mod infrastructure;

// 4. Application (Use Cases)
// Orchestration (Assembly pipeline, Validation, Snapshot)
// Dépend du Domain, de l'Infra et des Ports.
pub mod application;

// --- GESTION DES ERREURS GLOBALE ---
pub mod error;

// --- RE-EXPORTS (FACADE) ---
// Permet d'importer l'erreur principale facilement : use sondeo_core::SondeoError;
pub use error::SondeoError;
