use crate::model::pathway::Pathway;

pub const PATHWAY_MARKER: &str = "Pathway ";

/// Turns free-text model output into pathway records.
///
/// A line starting with `"Pathway "` (untrimmed) opens a new record and
/// becomes its title. Every other non-blank line is trimmed and appended as a
/// step of the current record. Records without steps are dropped. Never fails:
/// unexpected phrasing just yields fewer records.
pub fn parse_pathways(raw: &str) -> Vec<Pathway> {
    let mut pathways = Vec::new();
    let mut current = Pathway::default();

    for line in raw.lines() {
        if line.starts_with(PATHWAY_MARKER) {
            flush(&mut pathways, current);
            current = Pathway {
                title: line.to_string(),
                steps: Vec::new(),
            };
            continue;
        }

        let step = line.trim();
        if step.is_empty() {
            continue;
        }
        current.steps.push(step.to_string());
    }

    flush(&mut pathways, current);
    pathways
}

fn flush(pathways: &mut Vec<Pathway>, pathway: Pathway) {
    if !pathway.steps.is_empty() {
        pathways.push(pathway);
    }
}
