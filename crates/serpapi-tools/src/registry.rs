// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use async_trait::async_trait;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::ToolError;

/// Discovery record handed to the host framework.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolDefinition {
	pub name: String,
	pub description: String,
	pub input_schema: serde_json::Value,
}

#[async_trait]
pub trait Tool: Send + Sync {
	fn name(&self) -> &str;

	fn description(&self) -> &str;

	fn input_schema(&self) -> serde_json::Value;

	fn to_definition(&self) -> ToolDefinition {
		ToolDefinition {
			name: self.name().to_string(),
			description: self.description().to_string(),
			input_schema: self.input_schema(),
		}
	}

	async fn invoke(&self, args: serde_json::Value) -> Result<serde_json::Value, ToolError>;
}

pub struct ToolRegistry {
	tools: BTreeMap<String, Box<dyn Tool>>,
}

impl ToolRegistry {
	pub fn new() -> Self {
		Self {
			tools: BTreeMap::new(),
		}
	}

	pub fn register(&mut self, tool: Box<dyn Tool>) {
		let name = tool.name().to_string();
		tracing::debug!(tool_name = %name, "registering tool");
		self.tools.insert(name, tool);
	}

	pub fn get(&self, name: &str) -> Option<&dyn Tool> {
		self.tools.get(name).map(|t| t.as_ref())
	}

	pub fn names(&self) -> Vec<&str> {
		self.tools.keys().map(String::as_str).collect()
	}

	/// Definitions sorted by tool name.
	pub fn definitions(&self) -> Vec<ToolDefinition> {
		self.tools.values().map(|t| t.to_definition()).collect()
	}

	/// Looks up `name` and invokes it.
	pub async fn invoke(
		&self,
		name: &str,
		args: serde_json::Value,
	) -> Result<serde_json::Value, ToolError> {
		let tool = self
			.get(name)
			.ok_or_else(|| ToolError::InvalidArguments(format!("unknown tool: {name}")))?;
		tool.invoke(args).await
	}
}

impl Default for ToolRegistry {
	fn default() -> Self {
		Self::new()
	}
}

impl FromIterator<Box<dyn Tool>> for ToolRegistry {
	fn from_iter<I: IntoIterator<Item = Box<dyn Tool>>>(iter: I) -> Self {
		let mut registry = Self::new();
		for tool in iter {
			registry.register(tool);
		}
		registry
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	struct EchoTool {
		name: String,
	}

	#[async_trait]
	impl Tool for EchoTool {
		fn name(&self) -> &str {
			&self.name
		}

		fn description(&self) -> &str {
			"Echoes its arguments"
		}

		fn input_schema(&self) -> serde_json::Value {
			serde_json::json!({"type": "object", "properties": {}})
		}

		async fn invoke(&self, args: serde_json::Value) -> Result<serde_json::Value, ToolError> {
			Ok(args)
		}
	}

	proptest! {
		#[test]
		fn registry_stores_and_retrieves_tools_by_name(name in "[a-zA-Z][a-zA-Z0-9_]{0,30}") {
			let mut registry = ToolRegistry::new();
			registry.register(Box::new(EchoTool { name: name.clone() }));

			prop_assert!(registry.get(&name).is_some());
			prop_assert_eq!(registry.get(&name).unwrap().name(), name);
		}

		#[test]
		fn definitions_are_sorted_and_unique(
			names in prop::collection::vec("[a-z][a-z0-9_]{0,12}", 0..10)
		) {
			let registry: ToolRegistry = names
				.iter()
				.map(|n| Box::new(EchoTool { name: n.clone() }) as Box<dyn Tool>)
				.collect();

			let defs: Vec<String> = registry.definitions().into_iter().map(|d| d.name).collect();
			let mut expected = names.clone();
			expected.sort();
			expected.dedup();
			prop_assert_eq!(defs, expected);
		}
	}

	#[tokio::test]
	async fn invoke_dispatches_by_name() {
		let mut registry = ToolRegistry::new();
		registry.register(Box::new(EchoTool { name: "echo".into() }));

		let out = registry
			.invoke("echo", serde_json::json!({"a": 1}))
			.await
			.unwrap();
		assert_eq!(out, serde_json::json!({"a": 1}));
	}

	#[tokio::test]
	async fn invoke_unknown_tool() {
		let registry = ToolRegistry::new();
		let result = registry.invoke("missing", serde_json::Value::Null).await;
		assert!(matches!(result, Err(ToolError::InvalidArguments(_))));
	}
}
