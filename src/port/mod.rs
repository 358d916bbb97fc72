//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!        ┌────────────────┐        ┌─────────────────────┐
//!  CLI ─▶│  application   │───────▶│ PetApi (REST client)│
//!        │ header / page  │        └─────────────────────┘
//!        └───────┬────────┘        ┌─────────────────────┐
//!                │────────────────▶│ Alerter             │
//!        ┌───────▼────────┐        └─────────────────────┘
//!  HTTP ▶│ handlers, seed │───────▶ AccountStore / PetStore /
//!        └────────────────┘         HabitStore / SeedStore (SQLite)
//! ```

pub mod outbound;
