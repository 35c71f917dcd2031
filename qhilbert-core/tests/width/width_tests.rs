//! Width validation, conversions and derived masks.

#[cfg(test)]
mod tests {
    use qhilbert_core::{HilbertError, Position, Width, MAX_ORDER};

    #[test]
    fn test_new_accepts_powers_of_two() {
        for order in 0..=MAX_ORDER {
            let w = Width::new(1u64 << order).unwrap();
            assert_eq!(w.order(), order);
            assert_eq!(w.get() as u64, 1u64 << order);
            assert_eq!(w.area(), 1u64 << (2 * order));
        }
    }

    #[test]
    fn test_new_rejects_zero() {
        assert_eq!(Width::new(0), Err(HilbertError::InvalidArgument { width: 0 }));
    }

    #[test]
    fn test_new_rejects_non_powers_of_two() {
        for width in [3u64, 5, 6, 7, 12, 100, 65535] {
            assert_eq!(
                Width::new(width),
                Err(HilbertError::InvalidArgument { width })
            );
        }
    }

    #[test]
    fn test_new_rejects_too_wide() {
        assert!(Width::new(1 << 17).is_err());
        assert!(Width::new(u64::MAX).is_err());
        assert!(Width::new(1 << 16).is_ok());
    }

    #[test]
    fn test_from_order_bounds() {
        assert!(Width::from_order(16).is_ok());
        assert_eq!(
            Width::from_order(17),
            Err(HilbertError::OrderTooLarge { order: 17 })
        );
    }

    #[test]
    fn test_try_from_conversions() {
        let w: Width = 64u32.try_into().unwrap();
        assert_eq!(w.order(), 6);
        let w: Width = Width::try_from(8u64).unwrap();
        assert_eq!(u64::from(w), 8);
        assert!(Width::try_from(10u32).is_err());
    }

    #[test]
    fn test_contains() {
        let w = Width::new(4).unwrap();
        assert!(w.contains(0));
        assert!(w.contains(15));
        assert!(!w.contains(16));

        let w16 = Width::from_order(16).unwrap();
        assert!(w16.contains(u32::MAX));

        let w0 = Width::new(1).unwrap();
        assert!(w0.contains(0));
        assert!(!w0.contains(1));
    }

    #[test]
    fn test_masks() {
        let w = Width::new(8).unwrap();
        assert_eq!(w.distance_mask(), 0x3F);
        assert_eq!(w.padding(), 0x5555_5540);
    }

    #[test]
    fn test_display() {
        let w = Width::new(128).unwrap();
        assert_eq!(w.to_string(), "128x128 (order 7)");
    }

    #[test]
    fn test_error_messages() {
        let err = Width::new(3).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid width 3: must be a power of two in 1..=65536"
        );
        let err = HilbertError::OutOfDomain {
            index: 2,
            distance: 70,
            area: 64,
        };
        assert_eq!(
            err.to_string(),
            "distance 70 at index 2 is outside the curve domain [0, 64)"
        );
    }

    #[test]
    fn test_position_helpers() {
        let p = Position::new(3, 5);
        assert_eq!(p.transposed(), Position::new(5, 3));
        assert_eq!(p.manhattan(Position::new(1, 8)), 5);
        assert_eq!(p.chebyshev(Position::new(1, 8)), 3);
        assert_eq!(<(u32, u32)>::from(p), (3, 5));
        assert_eq!(<[u32; 2]>::from(p), [3, 5]);
        assert_eq!(Position::from([3, 5]), p);
        assert_eq!(bytemuck::cast::<Position, [u32; 2]>(p), [3, 5]);
    }
}
