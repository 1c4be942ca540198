//! Integration tests for the board layout engine
//!
//! Checks the coordinate mapping and the starting position through the public
//! API only.

use std::collections::HashSet;

use bevy::math::Vec2;
use xfboard::game::{
    generate_starting_position, square_to_pixel, BoardGeometry, BoardSquare, PieceKind, Side,
    StartingPosition,
};
use xfboard::rendering::{checker_color, piece_placements, Shade};

#[test]
fn test_square_to_pixel_tiles_the_grid() {
    //! Every square maps to a distinct cell of an exact 8x8 grid
    //!
    //! With square size 100 and offset 50, each origin must be 50 + k*100 for
    //! k in 0..8 on both axes, and all 64 origins must differ.
    let mut origins = HashSet::new();
    for square in BoardSquare::all() {
        let pixel = square_to_pixel(square, 100.0, 50.0);
        let col = (pixel.x - 50.0) / 100.0;
        let row = (pixel.y - 50.0) / 100.0;
        assert_eq!(col.fract(), 0.0);
        assert_eq!(row.fract(), 0.0);
        assert!((0.0..8.0).contains(&col) && (0.0..8.0).contains(&row));
        assert!(origins.insert((col as u8, row as u8)), "{} collides", square);
    }
    assert_eq!(origins.len(), 64);
}

#[test]
fn test_corner_squares() {
    //! a1 is drawn bottom-left and h8 top-right
    let geometry = BoardGeometry::standard();
    let a1 = geometry.cell_origin(BoardSquare::new(1, 1).unwrap());
    let h8 = geometry.cell_origin(BoardSquare::new(8, 8).unwrap());
    assert_eq!(a1, Vec2::new(50.0, 750.0));
    assert_eq!(h8, Vec2::new(750.0, 50.0));
}

#[test]
fn test_concrete_coordinates() {
    let d1 = BoardSquare::new(4, 1).unwrap();
    let a8 = BoardSquare::new(1, 8).unwrap();
    assert_eq!(square_to_pixel(d1, 100.0, 50.0), Vec2::new(350.0, 750.0));
    assert_eq!(square_to_pixel(a8, 100.0, 50.0), Vec2::new(50.0, 50.0));
}

#[test]
fn test_each_side_has_standard_composition() {
    for side in Side::ALL {
        let pieces = generate_starting_position(side.back_rank(), side.pawn_rank(), side).unwrap();
        let count = |kind: PieceKind| pieces.iter().filter(|p| p.kind == kind).count();

        assert_eq!(pieces.len(), 16);
        assert_eq!(count(PieceKind::Pawn), 8);
        assert_eq!(count(PieceKind::Bishop), 2);
        assert_eq!(count(PieceKind::Knight), 2);
        assert_eq!(count(PieceKind::Rook), 2);
        assert_eq!(count(PieceKind::Queen), 1);
        assert_eq!(count(PieceKind::King), 1);
    }
}

#[test]
fn test_full_position_occupies_32_distinct_squares() {
    let position = StartingPosition::standard();
    let squares: HashSet<_> = position.pieces().iter().map(|p| p.square).collect();
    assert_eq!(squares.len(), 32);
    assert!(squares.iter().all(|s| matches!(s.rank(), 1 | 2 | 7 | 8)));
}

#[test]
fn test_checker_color_halves() {
    let mut light = 0;
    let mut dark = 0;
    for row in 0..8 {
        for col in 0..8 {
            match checker_color(row, col) {
                Shade::Light => light += 1,
                Shade::Dark => dark += 1,
            }
        }
    }
    assert_eq!((light, dark), (32, 32));
}

#[test]
fn test_placements_fill_distinct_cells() {
    let position = StartingPosition::standard();
    let placements = piece_placements(&position, &BoardGeometry::standard());
    let centres: HashSet<_> = placements
        .iter()
        .map(|p| (p.world.x as i32, p.world.y as i32))
        .collect();
    assert_eq!(centres.len(), 32);
}
