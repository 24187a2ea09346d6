//! End-to-end browsing scenarios through the controller.

use paper_vista::config::Config;
use paper_vista::controller::{Controller, Event};
use paper_vista::models::{ExportFormat, Paper};

/// 25 papers spanning 2018-2023, in payload order.
fn sample_papers() -> Vec<Paper> {
    (0..25)
        .map(|i| Paper {
            title: format!("Study {i} of Neural Methods"),
            authors: format!("Author {i}"),
            published_at: format!("{}-06-{:02}", 2018 + (i % 6), 1 + i % 28),
            citation_count: (i * 7) as u64,
            journal: "Journal of Tests".to_string(),
            r#abstract: format!("{} end of abstract {i}", "lorem ipsum ".repeat(12)),
            ..Default::default()
        })
        .collect()
}

fn controller_in(dir: &std::path::Path) -> Controller {
    let mut config = Config::default();
    config.export_dir = dir.to_path_buf();
    let mut controller = Controller::new(&config);
    controller.on_loaded(Ok(sample_papers()));
    controller
}

#[tokio::test]
async fn test_year_range_filter() {
    let dir = tempfile::tempdir().unwrap();
    let mut controller = controller_in(dir.path());

    controller.handle(Event::StartYearChanged("2020".into())).await;
    controller.handle(Event::EndYearChanged("2021".into())).await;

    let filtered = controller.state().filtered();
    assert!(!filtered.is_empty());
    assert!(filtered.iter().all(|p| matches!(p.year(), Some(2020 | 2021))));
    // i % 6 in {2, 3}
    assert_eq!(filtered.len(), 8);
}

#[tokio::test]
async fn test_pagination_with_ten_rows() {
    let dir = tempfile::tempdir().unwrap();
    let mut controller = controller_in(dir.path());
    let all = sample_papers();

    assert_eq!(controller.state().page_items(), &all[0..10]);

    controller.handle(Event::NextPage).await;
    controller.handle(Event::NextPage).await;
    assert_eq!(controller.state().current_page(), 3);
    assert_eq!(controller.state().page_items(), &all[20..25]);

    let out = controller.handle(Event::NextPage).await;
    assert_eq!(controller.state().current_page(), 3);
    assert!(out.output.contains("Showing 21-25 of 25 (page 3/3)"));
    assert!(out.output.contains("( Next )"));
}

#[tokio::test]
async fn test_rows_change_resets_to_first_page() {
    let dir = tempfile::tempdir().unwrap();
    let mut controller = controller_in(dir.path());

    controller.handle(Event::NextPage).await;
    controller.handle(Event::RowsPerPageChanged("20".into())).await;

    assert_eq!(controller.state().current_page(), 1);
    assert_eq!(controller.state().page_items().len(), 20);
}

#[tokio::test]
async fn test_filter_with_no_matches_shows_placeholder() {
    let dir = tempfile::tempdir().unwrap();
    let mut controller = controller_in(dir.path());

    let out = controller.handle(Event::TitleChanged("quantum gravity".into())).await;
    assert!(out.output.contains("No data available for the given filters."));
    assert_eq!(controller.state().current_page(), 1);
}

#[tokio::test]
async fn test_export_empty_set_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let mut controller = controller_in(dir.path());

    controller.handle(Event::MinCitationsChanged("100000".into())).await;
    let out = controller.handle(Event::Export(ExportFormat::Json)).await;

    assert!(out.output.contains("No data available to export."));
    assert!(!dir.path().join("filtered_data.json").exists());
}

#[tokio::test]
async fn test_export_writes_whole_filtered_set() {
    let dir = tempfile::tempdir().unwrap();
    let mut controller = controller_in(dir.path());

    // 17 papers have >= 50 citations (i >= 8); more than one page.
    controller.handle(Event::MinCitationsChanged("50".into())).await;
    let out = controller.handle(Event::Export(ExportFormat::Json)).await;
    assert!(out.output.starts_with("Exported 17 papers"));

    let bytes = std::fs::read(dir.path().join("filtered_data.json")).unwrap();
    let exported: Vec<Paper> = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(exported, controller.state().filtered());
    assert_eq!(exported.len(), 17);
}

#[tokio::test]
async fn test_clear_filters_restores_everything() {
    let dir = tempfile::tempdir().unwrap();
    let mut controller = controller_in(dir.path());

    controller.handle(Event::TitleChanged("study 1".into())).await;
    assert!(controller.state().filtered().len() < 25);

    controller.handle(Event::ClearFilters).await;
    assert_eq!(controller.state().filtered(), sample_papers().as_slice());
}

#[tokio::test]
async fn test_read_more_toggle_on_card() {
    let dir = tempfile::tempdir().unwrap();
    let mut controller = controller_in(dir.path());

    let collapsed = controller.handle(Event::Show).await;
    assert!(collapsed.output.contains("[Read More]"));
    assert!(!collapsed.output.contains("end of abstract 0"));

    let expanded = controller.handle(Event::ToggleAbstract(1)).await;
    assert!(expanded.output.contains("end of abstract 0"));
    assert!(expanded.output.contains("[Read Less]"));
}
