//! `triage-agent`: agent state for the triage grid simulation.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`kind`]      | `AgentKind` (tagged Patient/Doctor variant), `AgentRole`, `DoctorState` |
//! | [`patient`]   | `PatientState` decay/death state machine, `Vitality`, `PatientEvent` |
//! | [`store`]     | `AgentStore` (all agents, indexed by `AgentId`)            |
//! | [`view`]      | `AgentView` read-only introspection for presentation layers |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                     |
//! |------------|------------------------------------------------------------|
//! | `serde`    | Derives `Serialize`/`Deserialize` on all public types.     |

pub mod kind;
pub mod patient;
pub mod store;
pub mod view;


pub use kind::{AgentKind, AgentRole, DoctorState};
pub use patient::{PatientEvent, PatientState, Vitality};
pub use store::AgentStore;
pub use view::AgentView;
