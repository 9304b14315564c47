// Padding calculator: worked examples and the square-grid guarantees.

use imgstore_core::constants::BYTES_PER_PIXEL;
use imgstore_core::error::ContainerError;
use imgstore_core::padding::{grid_side_for_len, PaddingPlan};

// The spec's worked example: 5-byte payload under a 20-byte prefix and a
// 64-byte digest sub-header.
#[test]
fn worked_example_hello() {
    let plan = PaddingPlan::for_unpadded_len(89).unwrap();
    assert_eq!(plan.unpadded_len, 89);
    assert_eq!(plan.total_len, 144); // m = 12
    assert_eq!(plan.end_padding, 55);
    assert_eq!(plan.grid_side, 6);
}

#[test]
fn empty_payload_still_pads_to_a_square() {
    // Prefix + digest alone: 20 + 64 = 84.
    let plan = PaddingPlan::for_unpadded_len(84).unwrap();
    assert_eq!(plan.total_len, 144);
    assert_eq!(plan.end_padding, 60);
    assert_eq!(plan.grid_side, 6);
}

#[test]
fn exact_fit_needs_no_padding() {
    // 144 = 12^2 with m = 12 already a multiple of 4.
    let plan = PaddingPlan::for_unpadded_len(144).unwrap();
    assert_eq!(plan.total_len, 144);
    assert_eq!(plan.end_padding, 0);
    assert_eq!(plan.grid_side, 6);
}

#[test]
fn zero_length_input() {
    let plan = PaddingPlan::for_unpadded_len(0).unwrap();
    assert_eq!(plan.total_len, 0);
    assert_eq!(plan.end_padding, 0);
    assert_eq!(plan.grid_side, 0);
}

#[test]
fn one_byte_rounds_up_to_smallest_grid() {
    // s = 1, m = 4, total = 16, side = 2.
    let plan = PaddingPlan::for_unpadded_len(1).unwrap();
    assert_eq!(plan.total_len, 16);
    assert_eq!(plan.end_padding, 15);
    assert_eq!(plan.grid_side, 2);
}

#[test]
fn grid_properties_hold_over_a_sweep() {
    for t in 0..5000 {
        let plan = PaddingPlan::for_unpadded_len(t).unwrap();

        assert!(plan.total_len >= t, "t={t}");
        assert_eq!(plan.end_padding, plan.total_len - t, "t={t}");
        assert_eq!(plan.total_len % BYTES_PER_PIXEL, 0, "t={t}");
        assert_eq!(
            plan.grid_side * plan.grid_side * BYTES_PER_PIXEL,
            plan.total_len,
            "t={t}"
        );
    }
}

#[test]
fn padding_is_minimal() {
    // The next-smaller admissible total (m shrunk by one step of 4) must not
    // fit the unpadded length.
    for t in 1..5000 {
        let plan = PaddingPlan::for_unpadded_len(t).unwrap();
        let m = plan.grid_side * 2;
        if m >= 4 {
            let smaller = (m - 4) * (m - 4);
            assert!(smaller < t, "t={t}: total {smaller} would also fit");
        }
    }
}

#[test]
fn grid_side_for_valid_totals() {
    assert_eq!(grid_side_for_len(144).unwrap(), 6);
    assert_eq!(grid_side_for_len(16).unwrap(), 2);
    assert_eq!(grid_side_for_len(0).unwrap(), 0);
}

#[test]
fn grid_side_rejects_non_square_lengths() {
    // 148 is divisible by 4 but 37 pixels is not a perfect square.
    assert!(matches!(
        grid_side_for_len(148).unwrap_err(),
        ContainerError::PaddingArithmetic { .. }
    ));
    // Not even divisible by the pixel width.
    assert!(matches!(
        grid_side_for_len(145).unwrap_err(),
        ContainerError::PaddingArithmetic { .. }
    ));
}
