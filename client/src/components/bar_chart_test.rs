use super::*;

fn counts(entries: &[(&str, i64)]) -> Vec<CategoryCount> {
    entries
        .iter()
        .map(|(category, count)| CategoryCount {
            category: (*category).to_owned(),
            count: *count,
        })
        .collect()
}

#[test]
fn bar_layout_empty_data_yields_no_bars() {
    assert!(bar_layout(640.0, 320.0, &[]).is_empty());
}

#[test]
fn bar_layout_produces_one_bar_per_category() {
    let bars = bar_layout(640.0, 320.0, &counts(&[("Hate Speech", 320), ("NSFW", 450), ("Spam", 210)]));
    assert_eq!(bars.len(), 3);
    assert_eq!(bars[0].label, "Hate Speech");
    assert_eq!(bars[2].count_label, "210");
}

#[test]
fn bar_layout_tallest_bar_reaches_top_padding() {
    let bars = bar_layout(640.0, 320.0, &counts(&[("NSFW", 450), ("Spam", 210)]));
    assert!((bars[0].y - TOP_PADDING).abs() < 1e-9);
    assert!(bars[1].y > bars[0].y);
}

#[test]
fn bar_layout_heights_scale_linearly() {
    let bars = bar_layout(640.0, 320.0, &counts(&[("A", 100), ("B", 50)]));
    assert!((bars[0].height - (bars[1].height * 2.0)).abs() < 1e-9);
}

#[test]
fn bar_layout_bars_stay_inside_plot_area() {
    let bars = bar_layout(640.0, 320.0, &counts(&[("A", 1), ("B", 2), ("C", 3), ("D", 4)]));
    for bar in &bars {
        assert!(bar.x >= SIDE_PADDING);
        assert!(bar.x + bar.width <= 640.0 - SIDE_PADDING + 1e-9);
        assert!(bar.y >= TOP_PADDING - 1e-9);
        assert!(bar.y + bar.height <= 320.0 - LABEL_STRIP + 1e-9);
    }
}

#[test]
fn bar_layout_negative_counts_clamp_to_zero_height() {
    let bars = bar_layout(640.0, 320.0, &counts(&[("A", -5), ("B", 10)]));
    assert!((bars[0].height - 0.0).abs() < 1e-9);
    assert!((bars[0].y - (320.0 - LABEL_STRIP)).abs() < 1e-9);
}

#[test]
fn bar_layout_all_zero_counts_produce_flat_bars() {
    let bars = bar_layout(640.0, 320.0, &counts(&[("A", 0), ("B", 0)]));
    for bar in &bars {
        assert!((bar.height - 0.0).abs() < 1e-9);
    }
}
