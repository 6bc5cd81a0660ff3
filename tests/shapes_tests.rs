//! Shape tests - canonical templates and the transpose-reverse rotation

use blockfall::core::Shape;
use blockfall::types::PieceKind;

#[test]
fn test_all_templates_have_four_cells() {
    for kind in PieceKind::ALL {
        assert_eq!(Shape::template(kind).offsets().len(), 4);
    }
}

#[test]
fn test_template_dimensions() {
    let dims = |kind| {
        let s = Shape::template(kind);
        (s.rows(), s.cols())
    };

    assert_eq!(dims(PieceKind::I), (1, 4));
    assert_eq!(dims(PieceKind::O), (2, 2));
    assert_eq!(dims(PieceKind::T), (2, 3));
    assert_eq!(dims(PieceKind::S), (2, 3));
    assert_eq!(dims(PieceKind::Z), (2, 3));
    assert_eq!(dims(PieceKind::J), (2, 3));
    assert_eq!(dims(PieceKind::L), (2, 3));
}

#[test]
fn test_template_cells() {
    let offsets = |kind| Shape::template(kind).offsets();

    assert_eq!(
        offsets(PieceKind::I).as_slice(),
        &[(0, 0), (1, 0), (2, 0), (3, 0)]
    );
    assert_eq!(
        offsets(PieceKind::O).as_slice(),
        &[(0, 0), (1, 0), (0, 1), (1, 1)]
    );
    assert_eq!(
        offsets(PieceKind::T).as_slice(),
        &[(1, 0), (0, 1), (1, 1), (2, 1)]
    );
    assert_eq!(
        offsets(PieceKind::S).as_slice(),
        &[(1, 0), (2, 0), (0, 1), (1, 1)]
    );
    assert_eq!(
        offsets(PieceKind::Z).as_slice(),
        &[(0, 0), (1, 0), (1, 1), (2, 1)]
    );
    assert_eq!(
        offsets(PieceKind::J).as_slice(),
        &[(0, 0), (0, 1), (1, 1), (2, 1)]
    );
    assert_eq!(
        offsets(PieceKind::L).as_slice(),
        &[(2, 0), (0, 1), (1, 1), (2, 1)]
    );
}

#[test]
fn test_rotation_is_transpose_reverse() {
    // S: [011 / 110] rotated cw -> [10 / 11 / 01]
    let s = Shape::template(PieceKind::S).rotated();
    assert_eq!((s.rows(), s.cols()), (3, 2));
    assert_eq!(s.offsets().as_slice(), &[(0, 0), (0, 1), (1, 1), (1, 2)]);

    // J: [100 / 111] rotated cw -> [11 / 10 / 10]
    let j = Shape::template(PieceKind::J).rotated();
    assert_eq!(j.offsets().as_slice(), &[(0, 0), (1, 0), (0, 1), (0, 2)]);
}

#[test]
fn test_rotation_does_not_mutate_original() {
    let t = Shape::template(PieceKind::T);
    let _rotated = t.rotated();
    assert_eq!(t, Shape::template(PieceKind::T));
}

#[test]
fn test_four_rotations_identity_for_every_kind() {
    for kind in PieceKind::ALL {
        let shape = Shape::template(kind);
        let mut turned = shape;
        for _ in 0..4 {
            turned = turned.rotated();
        }
        assert_eq!(shape, turned, "{:?} after 4 clockwise rotations", kind);
    }
}

#[test]
fn test_filled_is_false_outside_dimensions() {
    let i = Shape::template(PieceKind::I);
    assert!(i.filled(0, 0));
    assert!(!i.filled(0, 1));
    assert!(!i.filled(4, 0));
}
