//! File and service definitions
//!
//! Copyright (c) 2025 Protodoc Team
//! Licensed under the Apache-2.0 license

use crate::model::{Enum, Message};
use serde::{Deserialize, Serialize};

/// An RPC method of a service
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceMethod {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub request_type: String,
    #[serde(default)]
    pub request_long_type: String,
    pub request_full_type: String,
    #[serde(default)]
    pub request_streaming: bool,
    #[serde(default)]
    pub response_type: String,
    #[serde(default)]
    pub response_long_type: String,
    pub response_full_type: String,
    #[serde(default)]
    pub response_streaming: bool,
}

/// A service declaration
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub name: String,
    #[serde(default)]
    pub long_name: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub methods: Vec<ServiceMethod>,
}

/// A compilation unit and its direct declarations
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct File {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub package: String,
    #[serde(default)]
    pub messages: Vec<Message>,
    #[serde(default)]
    pub enums: Vec<Enum>,
    #[serde(default)]
    pub services: Vec<Service>,
}

impl File {
    pub fn new(name: impl Into<String>, package: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            package: package.into(),
            ..Self::default()
        }
    }

    pub fn with_messages(mut self, messages: Vec<Message>) -> Self {
        self.messages = messages;
        self
    }

    pub fn with_enums(mut self, enums: Vec<Enum>) -> Self {
        self.enums = enums;
        self
    }

    /// Look up a message declared in this file by fully-qualified name
    pub fn message(&self, full_name: &str) -> Option<&Message> {
        self.messages.iter().find(|m| m.full_name == full_name)
    }

    /// Look up an enum declared in this file by fully-qualified name
    pub fn enumeration(&self, full_name: &str) -> Option<&Enum> {
        self.enums.iter().find(|e| e.full_name == full_name)
    }

    pub fn has_messages(&self) -> bool {
        !self.messages.is_empty()
    }

    pub fn has_enums(&self) -> bool {
        !self.enums.is_empty()
    }

    pub fn has_services(&self) -> bool {
        !self.services.is_empty()
    }
}
