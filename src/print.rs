use stanza::style::{HAlign, Header, MinWidth, Separator, Styles};
use stanza::table::{Col, Row, Table};

use crate::evaluation::PredictionReport;
use crate::registry::ModelInfo;

pub fn tabulate_reports(reports: &[PredictionReport]) -> Table {
    let mut table = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(28))),
            Col::new(Styles::default().with(MinWidth(10)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(12)).with(HAlign::Right)),
        ])
        .with_row(Row::new(
            Styles::default().with(Header(true)).with(Separator(true)),
            vec!["Model".into(), "Accuracy".into(), "Elapsed (s)".into()],
        ));
    table.push_rows(reports.iter().map(|report| {
        Row::new(
            Styles::default(),
            vec![
                report.label.clone().into(),
                format!("{:.2}%", report.accuracy * 100.).into(),
                format!("{:.3}", report.elapsed.as_secs_f64()).into(),
            ],
        )
    }));
    table
}

pub fn tabulate_models(models: &[ModelInfo]) -> Table {
    let mut table = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(28))),
            Col::new(Styles::default().with(MinWidth(12)).with(HAlign::Centred)),
        ])
        .with_row(Row::new(
            Styles::default().with(Header(true)).with(Separator(true)),
            vec!["Model".into(), "In-progress".into()],
        ));
    table.push_rows(models.iter().map(|model| {
        Row::new(
            Styles::default(),
            vec![
                model.name.clone().into(),
                match model.predicts_in_progress {
                    true => "yes",
                    false => "no",
                }
                .into(),
            ],
        )
    }));
    table
}
