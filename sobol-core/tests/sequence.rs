use rand::{rngs::StdRng, Rng, SeedableRng};

use sobol_core::{
    directions, gray_code, sample, Generator, GeneratorMatrix, PrimitivePolynomial, SobolError,
    Table,
};

const NUM_ITER: u64 = 200;

// First rows of new-joe-kuo-6.21201
const JOE_KUO: &str = "d       s       a       m_i
2       1       0       1
3       2       1       1 3
4       3       1       1 3 1
5       3       2       1 1 1
6       4       1       1 1 3 3
7       4       4       1 3 5 13
8       5       2       1 1 5 5 17
9       5       4       1 1 5 5 5
10      5       7       1 1 7 11 19
";

fn joe_kuo() -> Table {
    Table::parse(JOE_KUO.as_bytes()).unwrap()
}

/// A random matrix built from the table, with precision and orientation picked at random.
fn random_matrix<T: Rng>(table: &Table, rng: &mut T) -> GeneratorMatrix<u64> {
    let dimension = rng.gen_range(0, table.len() + 1);
    let index_bits = rng.gen_range(0, 13);
    let precision = rng.gen_range(1, 65);
    let reverse = rng.gen::<bool>();
    GeneratorMatrix::new(table, dimension, index_bits, precision, reverse).unwrap()
}

#[test]
fn test_generator_follows_gray_code_order() {
    let table = joe_kuo();
    for trial in 0..NUM_ITER {
        let mut rng = StdRng::seed_from_u64(trial);
        let matrix = random_matrix(&table, &mut rng);
        let count = (1u64 << matrix.len()) - 1;
        let generator = Generator::new(&matrix, 0).unwrap();
        for (k, v) in generator.take(count as usize).enumerate() {
            let k = k as u64 + 1;
            assert_eq!(v.unwrap(), sample(&matrix, gray_code(k)).unwrap());
        }
    }
}

#[test]
fn test_generator_from_random_start() {
    let table = joe_kuo();
    for trial in 0..NUM_ITER {
        let mut rng = StdRng::seed_from_u64(trial);
        let matrix = random_matrix(&table, &mut rng);
        let end = 1u64 << matrix.len();
        let start = rng.gen_range(0, end);
        let mut generator = Generator::new(&matrix, start).unwrap();
        for index in start + 1..end {
            assert_eq!(
                generator.advance().unwrap(),
                sample(&matrix, gray_code(index)).unwrap()
            );
        }
        match generator.advance() {
            Err(SobolError::IndexOutOfRange { index, .. }) => assert_eq!(index, end),
            other => panic!("expected an out of range error, got {:?}", other),
        }
        assert!(Generator::new(&matrix, end).is_err());
    }
}

#[test]
fn test_reversed_columns_mirror_forward_columns() {
    let table = joe_kuo();
    for trial in 0..NUM_ITER {
        let mut rng = StdRng::seed_from_u64(trial);
        let dimension = rng.gen_range(0, table.len() + 1);
        let index_bits = rng.gen_range(0, 65);
        let precision: u32 = rng.gen_range(1, 65);
        let forward = GeneratorMatrix::<u64>::new(&table, dimension, index_bits, precision, false)
            .unwrap();
        let reversed = GeneratorMatrix::<u64>::new(&table, dimension, index_bits, precision, true)
            .unwrap();
        for (&f, &r) in forward.columns().iter().zip(reversed.columns()) {
            for i in 0..precision {
                assert_eq!((f >> i) & 1, (r >> (precision - 1 - i)) & 1);
            }
        }
        let index = rng.gen_range(0, 1u64 << index_bits.min(63));
        let f = sample(&forward, index).unwrap();
        let r = sample(&reversed, index).unwrap();
        assert_eq!(forward.unit_interval(f), reversed.unit_interval(r));
    }
}

#[test]
fn test_columns_fit_precision() {
    let table = joe_kuo();
    for trial in 0..NUM_ITER {
        let mut rng = StdRng::seed_from_u64(trial);
        let matrix = random_matrix(&table, &mut rng);
        let limit = if matrix.precision() == 64 {
            u64::max_value()
        } else {
            (1u64 << matrix.precision()) - 1
        };
        assert!(matrix.columns().iter().all(|&c| c <= limit));
    }
}

#[test]
fn test_dimension_zero_ignores_table() {
    let empty = Table::default();
    let table = joe_kuo();
    for n in 0..40 {
        assert_eq!(directions(&empty, 0, n).unwrap(), vec![1; n]);
        assert_eq!(directions(&table, 0, n).unwrap(), vec![1; n]);
    }
    assert_eq!(
        GeneratorMatrix::<u32>::new(&empty, 0, 32, 32, false).unwrap(),
        GeneratorMatrix::<u32>::new(&table, 0, 32, 32, false).unwrap()
    );
}

#[test]
fn test_first_points_of_dimension_one() {
    // dimension 1 of the table is x + 1, seeded with 1
    let table = joe_kuo();
    let matrix = GeneratorMatrix::<u32>::new(&table, 1, 32, 32, false).unwrap();
    let xs: Vec<f64> = (0..8)
        .map(|i| matrix.unit_interval(sample(&matrix, i).unwrap()))
        .collect();
    assert_eq!(xs, vec![0.0, 0.5, 0.75, 0.25, 0.625, 0.125, 0.375, 0.875]);
}

#[test]
fn test_sample_zero_is_zero() {
    let table = joe_kuo();
    for trial in 0..NUM_ITER {
        let mut rng = StdRng::seed_from_u64(trial);
        let matrix = random_matrix(&table, &mut rng);
        assert_eq!(sample(&matrix, 0).unwrap(), 0);
    }
}

#[test]
fn test_table_order_is_row_order() {
    let table = Table::from_entries(vec![
        PrimitivePolynomial::new(3, 0b010, vec![1, 3, 7]),
        PrimitivePolynomial::new(1, 0, vec![1]),
    ]);
    assert_eq!(directions(&table, 1, 6).unwrap(), vec![1, 3, 7, 5, 7, 43]);
    assert_eq!(directions(&table, 2, 3).unwrap(), vec![1, 3, 5]);
    assert!(directions(&table, 3, 3).is_err());
}
