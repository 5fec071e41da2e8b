//! Core type definitions
//!
//! This module contains the basic data structures shared by the graph,
//! detector and planner modules, with minimal logic - focusing on data
//! representation.

use std::fmt;

use serde::{Deserialize, Serialize};

fn default_kind() -> String {
    "class".to_string()
}

/// A named node in the dependency graph (a class, interface, module...)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Component {
    pub id: String,
    /// Opaque tag supplied by the front end, passed through unexamined
    #[serde(default = "default_kind")]
    pub kind: String,
    /// Whether the component exposes members usable as an interface boundary
    #[serde(default, alias = "hasExtractableSurface")]
    pub has_extractable_surface: bool,
}

impl Component {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: default_kind(),
            has_extractable_surface: false,
        }
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn with_extractable_surface(mut self, has_extractable_surface: bool) -> Self {
        self.has_extractable_surface = has_extractable_surface;
        self
    }
}

/// Mechanism through which one component receives another
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InjectionKind {
    Constructor,
    Field,
    Setter,
}

impl InjectionKind {
    /// Preference used when two candidate edges share the same target:
    /// FIELD, then SETTER, then CONSTRUCTOR.
    pub fn break_preference(self) -> u8 {
        match self {
            InjectionKind::Field => 0,
            InjectionKind::Setter => 1,
            InjectionKind::Constructor => 2,
        }
    }
}

impl fmt::Display for InjectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InjectionKind::Constructor => write!(f, "CONSTRUCTOR"),
            InjectionKind::Field => write!(f, "FIELD"),
            InjectionKind::Setter => write!(f, "SETTER"),
        }
    }
}

/// Directed "depends on" edge between two components
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DependencyEdge {
    pub from: String,
    pub to: String,
    #[serde(alias = "injectionKind")]
    pub injection_kind: InjectionKind,
    /// False for immutable constructor parameters, true when the binding can
    /// be changed after construction
    pub mutable: bool,
}

impl DependencyEdge {
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        injection_kind: InjectionKind,
        mutable: bool,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            injection_kind,
            mutable,
        }
    }

    pub fn key(&self) -> EdgeKey {
        EdgeKey {
            from: self.from.clone(),
            to: self.to.clone(),
            injection_kind: self.injection_kind,
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

impl fmt::Display for DependencyEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.from, self.to, self.injection_kind)
    }
}

/// Identity of a physical edge: `(from, to, injection_kind)`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct EdgeKey {
    pub from: String,
    pub to: String,
    pub injection_kind: InjectionKind,
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.from, self.to, self.injection_kind)
    }
}

/// Category of fix chosen to eliminate a cycle
///
/// Declaration order is the priority order used by the planner.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BreakStrategy {
    LazyInjection,
    InterfaceExtraction,
    MethodExtraction,
    Manual,
}

impl BreakStrategy {
    /// Automated strategies in the order they are tried
    pub const AUTOMATED: [BreakStrategy; 3] = [
        BreakStrategy::LazyInjection,
        BreakStrategy::InterfaceExtraction,
        BreakStrategy::MethodExtraction,
    ];

    pub fn priority(self) -> u8 {
        match self {
            BreakStrategy::LazyInjection => 0,
            BreakStrategy::InterfaceExtraction => 1,
            BreakStrategy::MethodExtraction => 2,
            BreakStrategy::Manual => 3,
        }
    }

    pub fn is_automated(self) -> bool {
        self != BreakStrategy::Manual
    }
}

impl fmt::Display for BreakStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BreakStrategy::LazyInjection => write!(f, "LAZY_INJECTION"),
            BreakStrategy::InterfaceExtraction => write!(f, "INTERFACE_EXTRACTION"),
            BreakStrategy::MethodExtraction => write!(f, "METHOD_EXTRACTION"),
            BreakStrategy::Manual => write!(f, "MANUAL"),
        }
    }
}

/// How the strategy selector picks a strategy for each cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrategyMode {
    /// Try the automated strategies in priority order
    #[default]
    Auto,
    /// Operator override: only the given strategy is considered
    Forced(BreakStrategy),
}

/// An elementary cycle, rotated so its smallest component id comes first
///
/// The edge back from the last component to the first is implied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Cycle {
    components: Vec<String>,
}

impl Cycle {
    /// Build a cycle from any rotation of its component sequence
    pub fn canonical(mut components: Vec<String>) -> Self {
        if let Some(min_pos) = components
            .iter()
            .enumerate()
            .min_by(|a, b| a.1.cmp(b.1))
            .map(|(pos, _)| pos)
        {
            components.rotate_left(min_pos);
        }
        Self { components }
    }

    pub fn components(&self) -> &[String] {
        &self.components
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn is_self_loop(&self) -> bool {
        self.components.len() == 1
    }

    pub fn contains(&self, id: &str) -> bool {
        self.components.iter().any(|c| c == id)
    }

    /// Consecutive `(from, to)` hops, including the closing hop
    pub fn hops(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        let len = self.components.len();
        (0..len).map(move |i| {
            (
                self.components[i].as_str(),
                self.components[(i + 1) % len].as_str(),
            )
        })
    }
}

impl fmt::Display for Cycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.components.join(" -> "))
    }
}

/// A strongly connected component: member ids sorted ascending
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StronglyConnectedComponent {
    members: Vec<String>,
    has_self_loop: bool,
}

impl StronglyConnectedComponent {
    pub fn new(mut members: Vec<String>, has_self_loop: bool) -> Self {
        members.sort();
        Self {
            members,
            has_self_loop,
        }
    }

    pub fn members(&self) -> &[String] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// The smallest member id, used to order SCCs
    pub fn min_id(&self) -> Option<&str> {
        self.members.first().map(String::as_str)
    }

    pub fn has_self_loop(&self) -> bool {
        self.has_self_loop
    }

    /// A singleton without a self-edge contains no cycle
    pub fn is_trivial(&self) -> bool {
        self.members.len() == 1 && !self.has_self_loop
    }

    pub fn contains(&self, id: &str) -> bool {
        self.members.binary_search_by(|m| m.as_str().cmp(id)).is_ok()
    }
}
