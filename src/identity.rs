//! Identity record for one runnable test unit.
//!
//! The record is a plain value: required fields are validated at
//! construction and nothing else about it carries behavior. Hosts serialize
//! identities to correlate test units across process boundaries, which is
//! why the optional normalized name pair follows stricter rules than the
//! display-oriented fields. An identity can be registered in the service
//! container like any other handle when a host chooses to share it that way.

use crate::services::error::ServiceError;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
/// Immutable description of a test unit: its name, owning type, and the
/// module that defines it.
pub struct TestUnitIdentity {
    name: String,
    owner_type: String,
    module_name: String,
    is_async: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    declaring_module: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    declaring_owner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    normalized: Option<NormalizedName>,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
/// Normalized `(type, method)` pair used for cross-process identification.
pub struct NormalizedName {
    pub type_name: String,
    pub method_name: String,
}

impl TestUnitIdentity {
    /// Build an identity from its required fields.
    ///
    /// Each required field must be non-empty; an empty one is a caller
    /// defect surfaced immediately as [`ServiceError::MissingArgument`].
    pub fn new(
        name: impl Into<String>,
        owner_type: impl Into<String>,
        module_name: impl Into<String>,
        is_async: bool,
    ) -> Result<Self, ServiceError> {
        let name = name.into();
        let owner_type = owner_type.into();
        let module_name = module_name.into();
        if name.is_empty() {
            return Err(ServiceError::MissingArgument("name"));
        }
        if owner_type.is_empty() {
            return Err(ServiceError::MissingArgument("owner_type"));
        }
        if module_name.is_empty() {
            return Err(ServiceError::MissingArgument("module_name"));
        }
        Ok(Self {
            name,
            owner_type,
            module_name,
            is_async,
            declaring_module: None,
            declaring_owner: None,
            normalized: None,
        })
    }

    /// Record the defining module when it differs from the owning module.
    ///
    /// Equal values collapse to `None` so serialized identities never carry
    /// redundant fields across process boundaries.
    pub fn with_declaring_module(mut self, declaring_module: impl Into<String>) -> Self {
        let value = declaring_module.into();
        self.declaring_module = (value != self.module_name).then_some(value);
        self
    }

    /// Record the declaring type when it differs from the owning type.
    ///
    /// Used to resolve overloads declared on a base type; equal values
    /// collapse to `None` like [`with_declaring_module`].
    ///
    /// [`with_declaring_module`]: Self::with_declaring_module
    pub fn with_declaring_owner(mut self, declaring_owner: impl Into<String>) -> Self {
        let value = declaring_owner.into();
        self.declaring_owner = (value != self.owner_type).then_some(value);
        self
    }

    /// Attach the normalized name pair.
    ///
    /// Pairs whose method segment contains spaces are dropped: normalized
    /// names feed cross-process lookup, which cannot represent them, so the
    /// identity falls back to its display fields instead.
    pub fn with_normalized(
        mut self,
        type_name: impl Into<String>,
        method_name: impl Into<String>,
    ) -> Self {
        let type_name = type_name.into();
        let method_name = method_name.into();
        if !method_name.contains(' ') {
            self.normalized = Some(NormalizedName {
                type_name,
                method_name,
            });
        }
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Full name of the type that owns the test unit.
    pub fn owner_type(&self) -> &str {
        &self.owner_type
    }

    pub fn module_name(&self) -> &str {
        &self.module_name
    }

    pub fn is_async(&self) -> bool {
        self.is_async
    }

    pub fn declaring_module(&self) -> Option<&str> {
        self.declaring_module.as_deref()
    }

    pub fn declaring_owner(&self) -> Option<&str> {
        self.declaring_owner.as_deref()
    }

    pub fn normalized(&self) -> Option<&NormalizedName> {
        self.normalized.as_ref()
    }

    /// Whether both halves of the normalized pair are present and usable.
    pub fn has_normalized_pair(&self) -> bool {
        self.normalized
            .as_ref()
            .is_some_and(|pair| !pair.type_name.is_empty() && !pair.method_name.is_empty())
    }
}
