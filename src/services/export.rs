use crate::domain::models::ExportReport;
use std::path::Path;

/// Embedded curriculum units, one exported text file per unit.
const CURRICULUM_UNITS: &[(&str, &str)] = &[
    (
        "unit-01-place-value",
        "Unit 1: Place Value\n\n\
         Lesson 1.1: Reading and writing numbers to 1,000\n\
         Lesson 1.2: Comparing three-digit numbers\n\
         Lesson 1.3: Rounding to the nearest ten and hundred\n",
    ),
    (
        "unit-02-addition-subtraction",
        "Unit 2: Addition and Subtraction\n\n\
         Lesson 2.1: Adding within 1,000 with regrouping\n\
         Lesson 2.2: Subtracting across zeros\n\
         Lesson 2.3: Two-step word problems\n",
    ),
    (
        "unit-03-multiplication",
        "Unit 3: Multiplication\n\n\
         Lesson 3.1: Equal groups and arrays\n\
         Lesson 3.2: Multiplying by 2, 5, and 10\n\
         Lesson 3.3: The distributive property\n",
    ),
];

pub fn export_curriculum(out_dir: &Path) -> anyhow::Result<ExportReport> {
    std::fs::create_dir_all(out_dir)?;
    let mut written = Vec::new();
    for (unit, body) in CURRICULUM_UNITS {
        let file = format!("{}.txt", unit);
        std::fs::write(out_dir.join(&file), body)?;
        written.push(file);
    }
    Ok(ExportReport {
        out_dir: out_dir.to_string_lossy().to_string(),
        written,
    })
}
