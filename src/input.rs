//! JSON input boundary
//!
//! Front ends that scan source code hand the analysis a single JSON document:
//!
//! ```json
//! {
//!   "components": [
//!     { "id": "app.OrderService", "kind": "class", "hasExtractableSurface": true },
//!     { "id": "app.PaymentService" }
//!   ],
//!   "edges": [
//!     { "from": "app.OrderService", "to": "app.PaymentService",
//!       "injectionKind": "CONSTRUCTOR", "mutable": false }
//!   ]
//! }
//! ```

use std::path::Path;

use miette::{NamedSource, SourceSpan};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Component, DependencyEdge};
use crate::error::{CycleBreakerError, InputParseError};
use crate::graph::{Graph, build_graph};

/// Components and dependency edges as supplied by a front end
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisInput {
    #[serde(default)]
    pub components: Vec<Component>,
    #[serde(default)]
    pub edges: Vec<DependencyEdge>,
}

impl AnalysisInput {
    /// Read and parse an input file
    pub fn load(path: &Path) -> Result<Self, CycleBreakerError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| CycleBreakerError::FileReadError {
                path: path.to_path_buf(),
                source: e,
            })?;

        let input = Self::parse(&path.display().to_string(), content)?;
        debug!(
            path = %path.display(),
            components = input.components.len(),
            edges = input.edges.len(),
            "loaded analysis input"
        );
        Ok(input)
    }

    /// Parse `content`, naming it `name` in diagnostics
    pub fn parse(name: &str, content: String) -> Result<Self, CycleBreakerError> {
        serde_json::from_str(&content).map_err(|e| {
            let span = offset_of(&content, e.line(), e.column())
                .map(|offset| SourceSpan::new(offset.into(), 1));

            CycleBreakerError::InputParseError(Box::new(InputParseError {
                file: name.to_string(),
                source_code: NamedSource::new(name, content.clone()),
                span,
                source: e,
            }))
        })
    }

    /// Validate the input and build the analysis graph
    pub fn into_graph(self) -> Result<Graph, CycleBreakerError> {
        Ok(build_graph(self.edges, self.components)?)
    }
}

/// Byte offset of a 1-based `(line, column)` position reported by serde_json
///
/// serde_json reports line 0 for errors not tied to a location.
fn offset_of(content: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }

    let line_start: usize = content
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    let offset = line_start + column.saturating_sub(1);

    (offset <= content.len()).then(|| offset.min(content.len().saturating_sub(1)))
}
