// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Pure Rust structs and traits that define the core concepts
// of the system.
//
// Rules for this layer:
//   - NO Burn framework types allowed here
//   - NO file I/O or network calls
//   - NO ML-specific code
//   - Only plain Rust structs, enums, and traits
//
// Think of this layer as the "dictionary" of the system —
// it defines what things ARE, not how they work.

// A review summary paired with its sentiment label
pub mod review;

// ROC curve point data handed to the plotting collaborator
pub mod roc;

// Core abstractions (traits) that other layers implement
pub mod traits;

// The error taxonomy shared by the whole pipeline
pub mod error;
