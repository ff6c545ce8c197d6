//! TypeScript code generation modules.

pub mod constants;
pub mod enums;
pub mod fields;
pub mod generics;
pub mod naming;
pub mod records;
pub mod responses;

pub use enums::EnumGenerator;
pub use generics::GenericParams;
pub use records::RecordGenerator;
pub use responses::ResponseGenerator;
