//! Plain-text and serializable summaries of planned routes.

use serde::Serialize;

use crate::campus::WalkPlan;
use crate::unweighted::Hop;
use crate::weighted::WeightedPath;

/// Render a campus walk as the narrated directions text.
pub fn render_walk(plan: &WalkPlan) -> String {
    let mut out = format!(
        "Path from {} to {}:\n",
        plan.start.long_name, plan.goal.long_name
    );
    for step in &plan.steps {
        out.push_str(&format!(
            "\tWalk {:.0} feet {} to ({:.0}, {:.0})\n",
            step.distance, step.direction, step.to.x, step.to.y
        ));
    }
    out.push_str(&format!("Total distance: {:.0} feet\n", plan.total_distance));
    out
}

/// One hop of a labeled path, rendered with its connecting label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HopRecord {
    pub from: String,
    pub to: String,
    pub via: String,
}

/// Fewest-hops search result in a display-ready shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HopSummary {
    pub start: String,
    pub goal: String,
    pub hops: Vec<HopRecord>,
}

impl HopSummary {
    pub fn from_hops(start: &str, goal: &str, hops: &[Hop<String, String>]) -> Self {
        Self {
            start: start.to_string(),
            goal: goal.to_string(),
            hops: hops
                .iter()
                .map(|hop| HopRecord {
                    from: hop.parent.clone(),
                    to: hop.child.clone(),
                    via: hop.label.clone(),
                })
                .collect(),
        }
    }

    pub fn render_plain(&self) -> String {
        let mut out = format!("path from {} to {}:\n", self.start, self.goal);
        for hop in &self.hops {
            out.push_str(&format!("{} to {} via {}\n", hop.from, hop.to, hop.via));
        }
        out
    }
}

/// One weighted edge of a least-cost path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostRecord {
    pub from: String,
    pub to: String,
    pub weight: f64,
}

/// Least-cost search result in a display-ready shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostSummary {
    pub start: String,
    pub goal: String,
    pub edges: Vec<CostRecord>,
    pub total: f64,
}

impl CostSummary {
    pub fn from_path(start: &str, goal: &str, path: &WeightedPath<String>) -> Self {
        Self {
            start: start.to_string(),
            goal: goal.to_string(),
            edges: path
                .edges
                .iter()
                .map(|edge| CostRecord {
                    from: edge.parent.clone(),
                    to: edge.child.clone(),
                    weight: edge.weight,
                })
                .collect(),
            total: path.total,
        }
    }

    pub fn render_plain(&self) -> String {
        let mut out = format!("path from {} to {}:\n", self.start, self.goal);
        for edge in &self.edges {
            out.push_str(&format!(
                "{} to {} with weight {:.3}\n",
                edge.from, edge.to, edge.weight
            ));
        }
        out.push_str(&format!("total cost: {:.3}\n", self.total));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::campus::{Building, Point, WalkStep};
    use crate::campus::Compass;
    use crate::weighted::WeightedEdge;

    fn building(short: &str, long: &str, x: f64, y: f64) -> Building {
        Building {
            short_name: short.to_string(),
            long_name: long.to_string(),
            location: Point { x, y },
        }
    }

    #[test]
    fn walk_rendering_rounds_to_whole_feet() {
        let plan = WalkPlan {
            start: building("LIB", "Main Library", 100.0, 100.0),
            goal: building("ENG", "Engineering Hall", 300.0, 400.0),
            steps: vec![
                WalkStep {
                    distance: 206.2,
                    direction: Compass::East,
                    to: Point { x: 300.0, y: 150.0 },
                },
                WalkStep {
                    distance: 250.0,
                    direction: Compass::South,
                    to: Point { x: 300.0, y: 400.0 },
                },
            ],
            total_distance: 456.2,
        };
        let text = render_walk(&plan);
        assert_eq!(
            text,
            "Path from Main Library to Engineering Hall:\n\
             \tWalk 206 feet E to (300, 150)\n\
             \tWalk 250 feet S to (300, 400)\n\
             Total distance: 456 feet\n"
        );
    }

    #[test]
    fn hop_summary_renders_one_line_per_hop() {
        let hops = vec![Hop {
            label: "alpha-1".to_string(),
            parent: "Borealis".to_string(),
            child: "Aether".to_string(),
        }];
        let summary = HopSummary::from_hops("Borealis", "Aether", &hops);
        assert_eq!(
            summary.render_plain(),
            "path from Borealis to Aether:\nBorealis to Aether via alpha-1\n"
        );
    }

    #[test]
    fn hop_summary_serializes_with_stable_keys() {
        let hops = vec![Hop {
            label: "alpha-1".to_string(),
            parent: "Borealis".to_string(),
            child: "Aether".to_string(),
        }];
        let summary = HopSummary::from_hops("Borealis", "Aether", &hops);
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["start"], "Borealis");
        assert_eq!(json["hops"][0]["via"], "alpha-1");
    }

    #[test]
    fn cost_summary_renders_three_decimal_weights() {
        let path = WeightedPath {
            edges: vec![WeightedEdge {
                weight: 0.5,
                parent: "Aether".to_string(),
                child: "Borealis".to_string(),
            }],
            total: 0.5,
        };
        let summary = CostSummary::from_path("Aether", "Borealis", &path);
        assert_eq!(
            summary.render_plain(),
            "path from Aether to Borealis:\nAether to Borealis with weight 0.500\ntotal cost: 0.500\n"
        );
    }
}
