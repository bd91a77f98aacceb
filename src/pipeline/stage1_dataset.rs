use crate::model::criteria::{EvaluationRow, builtin_criteria};

#[derive(Debug, Clone)]
pub struct Dataset {
    pub rows: Vec<EvaluationRow>,
}

impl Dataset {
    pub fn uncategorized(&self) -> impl Iterator<Item = &EvaluationRow> {
        self.rows.iter().filter(|r| r.category.is_none())
    }
}

pub fn build_dataset() -> Dataset {
    let rows = builtin_criteria()
        .iter()
        .enumerate()
        .map(|(i, def)| EvaluationRow::new(i, def.mark, def.description))
        .collect::<Vec<_>>();
    Dataset { rows }
}

pub fn run_stage1() -> Dataset {
    let dataset = build_dataset();
    for row in dataset.uncategorized() {
        tracing::warn!(
            criterion = %row.id,
            mark = row.mark,
            "mark outside (0, 25]; row has no performance category"
        );
    }
    tracing::info!(criteria = dataset.rows.len(), "dataset built");
    dataset
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_dataset.rs"]
mod tests;
