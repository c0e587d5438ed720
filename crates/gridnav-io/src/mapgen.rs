//! Random occupancy grids for demos and stress runs.

use gridnav_core::{InvalidGrid, Occupancy, OccupancyGrid};
use rand::Rng;

/// Generate a `rows × cols` grid where each cell is blocked with
/// probability `density`, clamped to `[0, 1]`.
pub fn random_grid(
    rows: usize,
    cols: usize,
    density: f64,
    rng: &mut impl Rng,
) -> Result<OccupancyGrid, InvalidGrid> {
    let density = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
    let mut grid = OccupancyGrid::filled(rows, cols, Occupancy::Free)?;
    let mut blocked = 0;
    for i in 0..grid.len() {
        if rng.random_range(0.0..1.0) < density {
            grid.set(grid.cell(i), Occupancy::Blocked);
            blocked += 1;
        }
    }
    log::debug!("generated {rows}x{cols} grid, {blocked} blocked cells");
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn density_extremes() {
        let mut rng = StdRng::seed_from_u64(7);
        let open = random_grid(6, 9, 0.0, &mut rng).unwrap();
        assert_eq!(open.count(Occupancy::Blocked), 0);
        let solid = random_grid(6, 9, 1.0, &mut rng).unwrap();
        assert_eq!(solid.count(Occupancy::Free), 0);
        let clamped = random_grid(2, 2, 5.0, &mut rng).unwrap();
        assert_eq!(clamped.count(Occupancy::Blocked), 4);
    }

    #[test]
    fn mixed_density_produces_both() {
        let mut rng = StdRng::seed_from_u64(42);
        let g = random_grid(30, 30, 0.3, &mut rng).unwrap();
        let blocked = g.count(Occupancy::Blocked);
        assert!(blocked > 0);
        assert!(blocked < g.len());
    }

    #[test]
    fn same_seed_same_grid() {
        let a = random_grid(10, 10, 0.4, &mut StdRng::seed_from_u64(3)).unwrap();
        let b = random_grid(10, 10, 0.4, &mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn zero_dimensions_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(random_grid(0, 5, 0.2, &mut rng).is_err());
    }
}
