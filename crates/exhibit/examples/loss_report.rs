//! Example: a two-table loss report with a shared title

use exhibit::prelude::*;

fn triangle(name: &str, values: [[f64; 3]; 3]) -> Result<Table> {
    let columns = (0..3)
        .map(|c| {
            Series::new(
                format!("{} months", (c + 1) * 12),
                values.iter().map(|row| row[c]),
            )
        })
        .collect();
    let frame = Frame::new(columns)?
        .with_index(["2021", "2022", "2023"])?
        .with_index_name("Origin");

    Ok(Table::builder(frame)
        .formats(Formats::NumFormat("#,0".into()))
        .title([name])
        .build()?)
}

fn main() -> Result<()> {
    let paid = triangle(
        "Paid",
        [[100.0, 180.0, 210.0], [120.0, 200.0, 0.0], [140.0, 0.0, 0.0]],
    )?;
    let incurred = triangle(
        "Incurred",
        [[150.0, 200.0, 220.0], [160.0, 230.0, 0.0], [175.0, 0.0, 0.0]],
    )?;

    let report = Container::row([paid, incurred])
        .title(["Loss Development", "Accident years 2021-2023"])
        .margin((0, 1))
        .build()?;

    let path = std::env::temp_dir().join("loss_report.xlsx");
    report.to_excel(&path)?;
    println!(
        "Wrote a {}x{} exhibit to {}",
        report.height(),
        report.width(),
        path.display()
    );
    Ok(())
}
