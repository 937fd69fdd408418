use rand::Rng;
use sortkit::prelude::*;

#[test]
fn test_select_small() {
    for &method in SortingMethod::ALL.iter() {
        let sorter = AnySorter::new(method);
        let mut data = vec![5, 3, 1, 4, 2];
        assert_eq!(sorter.select(2, &mut data).unwrap(), 3, "method {method}");
    }
}

#[test]
fn test_select_matches_sorted_at_every_rank() {
    let mut rng = rand::rng();
    let sorter = AnySorter::default();
    for _ in 0..50 {
        let len = rng.random_range(1..40);
        let original: Vec<i64> = (0..len).map(|_| rng.random_range(-100..100)).collect();

        let mut expected = original.clone();
        expected.sort();

        for rank in 0..original.len() {
            let mut data = original.clone();
            let got = sorter.select(rank, &mut data).unwrap();
            assert_eq!(got, expected[rank], "rank {rank} of {original:?}");
        }
    }
}

#[test]
fn test_select_partitions_around_the_rank() {
    let mut rng = rand::rng();
    let sorter = AnySorter::default();
    for _ in 0..50 {
        let len = rng.random_range(1..60);
        let mut data: Vec<i32> = (0..len).map(|_| rng.random_range(-50..50)).collect();
        let rank = rng.random_range(0..data.len());

        let got = sorter.select(rank, &mut data).unwrap();
        assert_eq!(data[rank], got);
        assert!(data[..rank].iter().all(|x| *x <= got));
        assert!(data[rank + 1..].iter().all(|x| *x >= got));
    }
}

#[test]
fn test_select_range_uses_range_relative_ranks() {
    for &method in SortingMethod::ALL.iter() {
        let sorter = AnySorter::new(method);

        let mut data = vec![90, 80, 7, 6, 5, 4, 70, 60];
        // Window 2..6 holds [7, 6, 5, 4]; rank 0 is its smallest.
        assert_eq!(sorter.select_range(0, &mut data, 2, 6).unwrap(), 4);
        assert_eq!(sorter.select_range(3, &mut data, 2, 6).unwrap(), 7);
        // The window was only permuted; outside stayed put.
        assert_eq!(&data[..2], &[90, 80]);
        assert_eq!(&data[6..], &[70, 60]);
        let mut window = data[2..6].to_vec();
        window.sort();
        assert_eq!(window, vec![4, 5, 6, 7]);
    }
}

#[test]
fn test_select_rejects_out_of_range_ranks() {
    let sorter = AnySorter::default();
    let original = vec![3, 1, 2];

    let mut data = original.clone();
    assert_eq!(
        sorter.select(3, &mut data),
        Err(SortError::RankOutOfRange { rank: 3, len: 3 })
    );
    assert_eq!(data, original);

    // Any rank is out of range for an empty window.
    assert_eq!(
        sorter.select_range(0, &mut data, 1, 1),
        Err(SortError::RankOutOfRange { rank: 0, len: 0 })
    );
    assert_eq!(data, original);

    let mut empty: Vec<i32> = vec![];
    assert_eq!(
        sorter.select(0, &mut empty),
        Err(SortError::RankOutOfRange { rank: 0, len: 0 })
    );
}

#[test]
fn test_median_odd_lengths() {
    for &method in SortingMethod::ALL.iter() {
        let sorter = AnySorter::new(method);

        let mut data = vec![5, 3, 1, 4, 2];
        assert_eq!(sorter.median(&mut data).unwrap(), 3);

        let mut data = vec![9.0f64];
        assert_eq!(sorter.median(&mut data).unwrap(), 9.0);
    }
}

#[test]
fn test_median_even_lengths_average_the_middles() {
    for &method in SortingMethod::ALL.iter() {
        let sorter = AnySorter::new(method);

        let mut data = vec![1.0f64, 2.0, 3.0, 4.0];
        assert_eq!(sorter.median(&mut data).unwrap(), 2.5);

        let mut data = vec![4.0f32, 1.0, 3.0, 2.0];
        assert_eq!(sorter.median(&mut data).unwrap(), 2.5);

        // Integer medians truncate toward zero.
        let mut data = vec![1, 2, 3, 4];
        assert_eq!(sorter.median(&mut data).unwrap(), 2);

        let mut data = vec![-4i64, -1, -3, -2];
        assert_eq!(sorter.median(&mut data).unwrap(), -2);
    }
}

#[test]
fn test_median_integer_truncation_cases() {
    let sorter = AnySorter::default();

    let mut data = vec![1, 2];
    assert_eq!(sorter.median(&mut data).unwrap(), 1);

    let mut data = vec![-1, -2];
    assert_eq!(sorter.median(&mut data).unwrap(), -1);

    // Middles -1 and 2: exact midpoint 0.5 truncates to 0.
    let mut data = vec![-3, 2, -1, 4];
    assert_eq!(sorter.median(&mut data).unwrap(), 0);

    // No overflow near the extremes.
    let mut data = vec![i64::MAX, i64::MAX - 2];
    assert_eq!(sorter.median(&mut data).unwrap(), i64::MAX - 1);
}

#[test]
fn test_median_with_duplicate_middles() {
    for &method in SortingMethod::ALL.iter() {
        let sorter = AnySorter::new(method);

        let mut data = vec![2.0f64, 2.0, 1.0, 1.0];
        assert_eq!(sorter.median(&mut data).unwrap(), 1.5);

        let mut data = vec![5, 5, 5, 5, 5, 5];
        assert_eq!(sorter.median(&mut data).unwrap(), 5);
    }
}

#[test]
fn test_median_fuzz_vs_sorted() {
    let mut rng = rand::rng();
    let sorter = AnySorter::default();
    for _ in 0..100 {
        let len = rng.random_range(1..50);
        let original: Vec<f64> = (0..len)
            .map(|_| rng.random_range(-1000..1000) as f64)
            .collect();

        let mut expected = original.clone();
        expected.sort_by(f64::total_cmp);
        let want = if len % 2 == 1 {
            expected[len / 2]
        } else {
            0.5 * (expected[len / 2 - 1] + expected[len / 2])
        };

        let mut data = original.clone();
        assert_eq!(sorter.median(&mut data).unwrap(), want, "{original:?}");
    }
}

#[test]
fn test_median_range_form() {
    let sorter = AnySorter::default();
    let mut data = vec![100, 1, 2, 3, 4, 100];
    assert_eq!(sorter.median_range(&mut data, 1, 5).unwrap(), 2);
    assert_eq!(data[0], 100);
    assert_eq!(data[5], 100);
}

#[test]
fn test_median_by_with_independent_comparator_and_averager() {
    let sorter = AnySorter::default();

    // Median of readings ordered by value, averaged by the supplied closure;
    // no trait implementations on the element type.
    let mut readings = vec![(4.0f64, "d"), (1.0, "a"), (3.0, "c"), (2.0, "b")];
    let med = sorter
        .median_by(
            &mut readings,
            |a, b| a.0.total_cmp(&b.0),
            |lo, hi| (0.5 * (lo.0 + hi.0), "mid"),
        )
        .unwrap();
    assert_eq!(med.0, 2.5);
    assert_eq!(med.1, "mid");

    // A custom averager can pick a representative instead of interpolating.
    let mut data = vec![4, 1, 3, 2];
    let med = sorter
        .median_by(&mut data, |a, b| a.cmp(b), |lo, _hi| *lo)
        .unwrap();
    assert_eq!(med, 2);
}

#[test]
fn test_median_of_empty_range_fails() {
    for &method in SortingMethod::ALL.iter() {
        let sorter = AnySorter::new(method);

        let mut empty: Vec<i32> = vec![];
        assert_eq!(sorter.median(&mut empty), Err(SortError::EmptyRange));

        let mut data = vec![1, 2, 3];
        assert_eq!(
            sorter.median_range(&mut data, 2, 2),
            Err(SortError::EmptyRange)
        );
        assert_eq!(data, vec![1, 2, 3]);
    }
}

#[test]
fn test_selection_shared_across_methods() {
    let mut rng = rand::rng();
    let original: Vec<i32> = (0..200).map(|_| rng.random_range(-500..500)).collect();
    let mut expected = original.clone();
    expected.sort();

    for &method in SortingMethod::ALL.iter() {
        let sorter = AnySorter::new(method);
        for rank in [0, 1, 99, 100, 198, 199] {
            let mut data = original.clone();
            assert_eq!(
                sorter.select(rank, &mut data).unwrap(),
                expected[rank],
                "method {method}, rank {rank}"
            );
        }
    }
}
