//! Centralized Rule IDs for awaitparams.

/// Signature: `{ params }: { params: { id: string } }`
pub const RULE_ID_SINGLE_ID_SIGNATURE: &str = "AWP-S001";
/// Signature: `{ params }: { params: { id: string, roleId: string } }`
pub const RULE_ID_ID_ROLE_SIGNATURE: &str = "AWP-S002";

/// Read: `const id = parseInt(params.id)`
pub const RULE_ID_PARSE_INT_ID_READ: &str = "AWP-R001";
/// Read: `const id = params.id`
pub const RULE_ID_DIRECT_ID_READ: &str = "AWP-R002";
/// Read: `const roleId = params.roleId`
pub const RULE_ID_ROLE_ID_READ: &str = "AWP-R003";
