use std::collections::HashMap;
use std::io::Write;

use crate::core::{
    BreakStrategy, DependencyEdge, EdgeKey, InjectionKind, StronglyConnectedComponent,
};
use crate::error::CycleBreakerError;
use crate::graph::Graph;
use crate::planner::BreakPlan;

// Blue-Orange Accessible Palette - Soothing colors with excellent contrast
mod colors {
    pub const NORMAL_NODE_FILL: &str = "#E3F2FD"; // Light blue
    pub const NORMAL_NODE_STROKE: &str = "#1976D2"; // Medium blue
    pub const CYCLE_NODE_FILL: &str = "#FFF3E0"; // Light orange
    pub const CYCLE_NODE_STROKE: &str = "#F57C00"; // Vibrant orange
    pub const CONSTRUCTOR_EDGE: &str = "#64B5F6"; // Soft blue
    pub const FIELD_EDGE: &str = "#90A4AE"; // Blue-grey
    pub const SETTER_EDGE: &str = "#81C784"; // Soft green
    pub const CYCLE_EDGE: &str = "#FF6500"; // Deep orange
    pub const BROKEN_EDGE: &str = "#2E7D32"; // Dark green
    pub const MANUAL_NODE_STROKE: &str = "#C62828"; // Red
    pub const LEGEND_BG: &str = "#FAFAFA"; // Off-white background
}

// Helper macro for write operations that converts IO errors
macro_rules! writeln_out {
    ($dst:expr) => {
        writeln!($dst).map_err(CycleBreakerError::from)
    };
    ($dst:expr, $($arg:tt)*) => {
        writeln!($dst, $($arg)*).map_err(CycleBreakerError::from)
    };
}

/// How a single edge is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EdgeRole {
    Plain,
    InCycle,
    Broken(BreakStrategy),
}

/// Lookup tables shared by every output format
struct Highlights<'a> {
    scc_of: HashMap<&'a str, usize>,
    broken: HashMap<EdgeKey, BreakStrategy>,
    manual: Vec<&'a str>,
}

impl<'a> Highlights<'a> {
    fn new(sccs: &'a [StronglyConnectedComponent], plans: &'a [BreakPlan]) -> Self {
        let scc_of = sccs
            .iter()
            .filter(|scc| !scc.is_trivial())
            .enumerate()
            .flat_map(|(i, scc)| scc.members().iter().map(move |m| (m.as_str(), i)))
            .collect();

        let broken = plans
            .iter()
            .filter_map(|plan| plan.broken_edge().map(|e| (e.key(), plan.strategy())))
            .collect();

        let mut manual: Vec<&str> = plans
            .iter()
            .filter(|plan| plan.is_manual())
            .flat_map(|plan| plan.cycle().components().iter().map(String::as_str))
            .collect();
        manual.sort_unstable();
        manual.dedup();

        Self {
            scc_of,
            broken,
            manual,
        }
    }

    fn in_cycle(&self, id: &str) -> bool {
        self.scc_of.contains_key(id)
    }

    fn needs_manual_review(&self, id: &str) -> bool {
        self.manual.binary_search(&id).is_ok()
    }

    fn role(&self, edge: &DependencyEdge) -> EdgeRole {
        if let Some(&strategy) = self.broken.get(&edge.key()) {
            return EdgeRole::Broken(strategy);
        }
        match (
            self.scc_of.get(edge.from.as_str()),
            self.scc_of.get(edge.to.as_str()),
        ) {
            (Some(a), Some(b)) if a == b => EdgeRole::InCycle,
            _ => EdgeRole::Plain,
        }
    }
}

/// Renders the component graph as DOT or Mermaid
///
/// Members of non-trivial SCCs are highlighted, and with `highlight_plan`
/// every edge a [`BreakPlan`] breaks is drawn dashed and labelled with its
/// strategy.
pub struct GraphRenderer {
    highlight_plan: bool,
}

impl GraphRenderer {
    pub fn new(highlight_plan: bool) -> Self {
        Self { highlight_plan }
    }

    fn highlights<'a>(
        &self,
        sccs: &'a [StronglyConnectedComponent],
        plans: &'a [BreakPlan],
    ) -> Highlights<'a> {
        let plans = if self.highlight_plan { plans } else { &plans[..0] };
        Highlights::new(sccs, plans)
    }

    pub fn render_mermaid(
        &self,
        graph: &Graph,
        sccs: &[StronglyConnectedComponent],
        plans: &[BreakPlan],
        output: &mut dyn Write,
    ) -> Result<(), CycleBreakerError> {
        let highlights = self.highlights(sccs, plans);

        writeln_out!(output, "graph LR")?;

        for component in graph.components() {
            let node_id = self.mermaid_id(graph, &component.id);
            let label = format!(
                "{}<br/><i>{}</i>",
                self.mermaid_escape(&component.id),
                self.mermaid_escape(&component.kind)
            );

            if highlights.in_cycle(&component.id) {
                // Double circle for cyclic components
                writeln_out!(output, "    {}((\"{}\"))", node_id, label)?;
                let stroke = if highlights.needs_manual_review(&component.id) {
                    colors::MANUAL_NODE_STROKE
                } else {
                    colors::CYCLE_NODE_STROKE
                };
                writeln_out!(
                    output,
                    "    style {} fill:{},stroke:{},stroke-width:3px",
                    node_id,
                    colors::CYCLE_NODE_FILL,
                    stroke
                )?;
            } else {
                writeln_out!(output, "    {}[\"{}\"]", node_id, label)?;
                writeln_out!(
                    output,
                    "    style {} fill:{},stroke:{},stroke-width:2px",
                    node_id,
                    colors::NORMAL_NODE_FILL,
                    colors::NORMAL_NODE_STROKE
                )?;
            }
        }

        writeln_out!(output)?;

        for (link_style_index, edge) in graph.edges().enumerate() {
            let from = self.mermaid_id(graph, &edge.from);
            let to = self.mermaid_id(graph, &edge.to);

            match highlights.role(edge) {
                EdgeRole::Broken(strategy) => {
                    writeln_out!(
                        output,
                        "    {} -.->|\"{} ✂ {}\"| {}",
                        from,
                        edge.injection_kind,
                        strategy,
                        to
                    )?;
                    writeln_out!(
                        output,
                        "    linkStyle {} stroke:{},stroke-width:3px,stroke-dasharray:5 5",
                        link_style_index,
                        colors::BROKEN_EDGE
                    )?;
                }
                EdgeRole::InCycle => {
                    writeln_out!(
                        output,
                        "    {} ==>|{}| {}",
                        from,
                        edge.injection_kind,
                        to
                    )?;
                    writeln_out!(
                        output,
                        "    linkStyle {} stroke:{},stroke-width:3px",
                        link_style_index,
                        colors::CYCLE_EDGE
                    )?;
                }
                EdgeRole::Plain => {
                    writeln_out!(
                        output,
                        "    {} -->|{}| {}",
                        from,
                        edge.injection_kind,
                        to
                    )?;
                    writeln_out!(
                        output,
                        "    linkStyle {} stroke:{},stroke-width:2px",
                        link_style_index,
                        self.kind_color(edge.injection_kind)
                    )?;
                }
            }
        }

        if !highlights.scc_of.is_empty() {
            writeln_out!(output)?;
            writeln_out!(output, "    subgraph Legend")?;
            writeln_out!(output, "        L1[Acyclic component]")?;
            writeln_out!(output, "        L2((Component in cycle))")?;
            writeln_out!(
                output,
                "        style L1 fill:{},stroke:{},stroke-width:2px",
                colors::NORMAL_NODE_FILL,
                colors::NORMAL_NODE_STROKE
            )?;
            writeln_out!(
                output,
                "        style L2 fill:{},stroke:{},stroke-width:3px",
                colors::CYCLE_NODE_FILL,
                colors::CYCLE_NODE_STROKE
            )?;
            writeln_out!(
                output,
                "        style Legend fill:{},stroke:#ddd,stroke-width:1px",
                colors::LEGEND_BG
            )?;
            writeln_out!(output, "    end")?;
        }

        Ok(())
    }

    pub fn render_dot(
        &self,
        graph: &Graph,
        sccs: &[StronglyConnectedComponent],
        plans: &[BreakPlan],
        output: &mut dyn Write,
    ) -> Result<(), CycleBreakerError> {
        let highlights = self.highlights(sccs, plans);

        writeln_out!(output, "digraph component_dependencies {{")?;
        writeln_out!(output, "    rankdir=LR;")?;
        writeln_out!(output, "    node [shape=box, style=rounded];")?;
        writeln_out!(output)?;

        for component in graph.components() {
            let (fill_color, stroke_color) = if highlights.needs_manual_review(&component.id) {
                (colors::CYCLE_NODE_FILL, colors::MANUAL_NODE_STROKE)
            } else if highlights.in_cycle(&component.id) {
                (colors::CYCLE_NODE_FILL, colors::CYCLE_NODE_STROKE)
            } else {
                (colors::NORMAL_NODE_FILL, colors::NORMAL_NODE_STROKE)
            };

            writeln_out!(
                output,
                r#"    "{}" [label="{}\n({})", style="rounded,filled", fillcolor="{}", color="{}", penwidth=2];"#,
                self.dot_escape(&component.id),
                self.dot_escape(&component.id),
                self.dot_escape(&component.kind),
                fill_color,
                stroke_color
            )?;
        }

        writeln_out!(output)?;

        for edge in graph.edges() {
            let from = self.dot_escape(&edge.from);
            let to = self.dot_escape(&edge.to);

            match highlights.role(edge) {
                EdgeRole::Broken(strategy) => writeln_out!(
                    output,
                    r#"    "{}" -> "{}" [label="{}\n{}", color="{}", style=dashed, penwidth=3];"#,
                    from,
                    to,
                    edge.injection_kind,
                    strategy,
                    colors::BROKEN_EDGE
                )?,
                EdgeRole::InCycle => writeln_out!(
                    output,
                    r#"    "{}" -> "{}" [label="{}", color="{}", penwidth=3];"#,
                    from,
                    to,
                    edge.injection_kind,
                    colors::CYCLE_EDGE
                )?,
                EdgeRole::Plain => writeln_out!(
                    output,
                    r#"    "{}" -> "{}" [label="{}", color="{}", penwidth=2];"#,
                    from,
                    to,
                    edge.injection_kind,
                    self.kind_color(edge.injection_kind)
                )?,
            }
        }

        writeln_out!(output, "}}")?;
        Ok(())
    }

    fn kind_color(&self, kind: InjectionKind) -> &'static str {
        match kind {
            InjectionKind::Constructor => colors::CONSTRUCTOR_EDGE,
            InjectionKind::Field => colors::FIELD_EDGE,
            InjectionKind::Setter => colors::SETTER_EDGE,
        }
    }

    /// Mermaid node id for component `name`
    ///
    /// Non-alphanumeric characters become underscores, and the node index is
    /// appended so that ids such as `app.Foo` and `app_Foo` stay distinct.
    fn mermaid_id(&self, graph: &Graph, name: &str) -> String {
        let sanitized: String = name
            .chars()
            .map(|c| if c.is_alphanumeric() { c } else { '_' })
            .collect();
        match graph.node_index(name) {
            Some(idx) => format!("{sanitized}_{}", idx.index()),
            None => sanitized,
        }
    }

    /// Escape text placed inside a quoted Mermaid label
    fn mermaid_escape(&self, text: &str) -> String {
        text.replace('"', "#quot;")
            .replace('<', "#lt;")
            .replace('>', "#gt;")
    }

    fn dot_escape(&self, name: &str) -> String {
        name.replace('\\', "\\\\").replace('"', "\\\"")
    }
}
