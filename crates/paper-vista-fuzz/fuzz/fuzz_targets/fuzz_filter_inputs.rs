#![no_main]

use libfuzzer_sys::fuzz_target;
use paper_vista::filter::filter_papers;
use paper_vista::models::{FilterCriteria, Paper};
use paper_vista::pagination::{coerce_rows_per_page, page_slice};

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let fields: Vec<&str> = text.split('\n').collect();
    let field = |i: usize| fields.get(i).copied().unwrap_or("");
    let (title, citations, start, end, rows) = (field(0), field(1), field(2), field(3), field(4));

    let criteria = FilterCriteria::from_inputs(title, citations, start, end);
    let papers = vec![Paper { published_at: end.to_string(), ..Default::default() }];
    let filtered = filter_papers(&papers, &criteria);
    let _ = page_slice(&filtered, 1, coerce_rows_per_page(rows));
});
