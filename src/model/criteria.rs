use serde::Serialize;

use crate::model::category::{PerformanceCategory, categorize};

#[derive(Debug, Clone, Copy)]
pub struct CriterionDef {
    pub mark: f64,
    pub description: &'static str,
}

/// Criterion ids are positional: entry `i` is `P.{i + 1}`.
const BUILTIN_CRITERIA: &[CriterionDef] = &[
    CriterionDef {
        mark: 8.0,
        description: "Vision, mission, PEO, PSO definition",
    },
    CriterionDef {
        mark: 12.0,
        description: "Vision, mission, PEO, PO, PSO dissemination",
    },
    CriterionDef {
        mark: 1.0,
        description: "Sustainability and SDG initiatives",
    },
    CriterionDef {
        mark: 2.0,
        description: "PO/PSO assessment tools",
    },
    CriterionDef {
        mark: 2.0,
        description: "Quality assessment in CIE and SEE",
    },
    CriterionDef {
        mark: 2.0,
        description: "Course file documentation",
    },
    CriterionDef {
        mark: 2.0,
        description: "COs assessment tools",
    },
    CriterionDef {
        mark: 2.0,
        description: "Student admission quality",
    },
    CriterionDef {
        mark: 1.0,
        description: "Program success rates",
    },
    CriterionDef {
        mark: 3.0,
        description: "Placements and higher studies",
    },
    CriterionDef {
        mark: 5.0,
        description: "Professional societies and events",
    },
    CriterionDef {
        mark: 3.0,
        description: "Publications and awards",
    },
    CriterionDef {
        mark: 8.0,
        description: "Program curriculum records",
    },
    CriterionDef {
        mark: 6.0,
        description: "Student-faculty ratio",
    },
    CriterionDef {
        mark: 17.0,
        description: "Faculty training and development",
    },
    CriterionDef {
        mark: 11.0,
        description: "Faculty innovation support",
    },
    CriterionDef {
        mark: 20.0,
        description: "Faculty research output",
    },
    CriterionDef {
        mark: 16.0,
        description: "Lab facilities",
    },
    CriterionDef {
        mark: 12.0,
        description: "Lab maintenance",
    },
    CriterionDef {
        mark: 10.0,
        description: "Non-teaching staff",
    },
    CriterionDef {
        mark: 8.0,
        description: "Academic audits",
    },
    CriterionDef {
        mark: 15.0,
        description: "Curriculum quality",
    },
    CriterionDef {
        mark: 13.0,
        description: "Course outcomes mapping",
    },
    CriterionDef {
        mark: 1.0,
        description: "Teaching methods",
    },
    CriterionDef {
        mark: 11.0,
        description: "Industry partnerships",
    },
    CriterionDef {
        mark: 5.0,
        description: "Capstone projects",
    },
    CriterionDef {
        mark: 2.0,
        description: "Case studies",
    },
    CriterionDef {
        mark: 10.0,
        description: "MOOCs certifications",
    },
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationRow {
    #[serde(skip)]
    pub index: usize,
    pub id: String,
    pub mark: f64,
    pub description: String,
    pub category: Option<PerformanceCategory>,
}

impl EvaluationRow {
    pub fn new(index: usize, mark: f64, description: &str) -> Self {
        Self {
            index,
            id: format!("P.{}", index + 1),
            mark,
            description: description.to_string(),
            category: categorize(mark),
        }
    }
}

pub fn builtin_criteria() -> &'static [CriterionDef] {
    BUILTIN_CRITERIA
}
