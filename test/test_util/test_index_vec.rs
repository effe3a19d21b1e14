//! Test module for `edgegraph::util::index_vec`, the compact integer columns
//! underneath the graph store.

use edgegraph::util::index_vec::IndexVec;
use edgegraph::Error;


#[test]
fn test_width_limits() {
    let mut v = IndexVec::<u16>::new();
    v.push(65535).unwrap();
    panic_unless!(matches!(v.push(65536), Err(Error::Failure(_))),
                  "65536 should not fit in a u16 column");
    panic_unless_eq!(1, v.len());
    panic_unless_eq!(Some(65535), v.last());
}

#[test]
fn test_extend_filled_and_set() {
    let mut v = IndexVec::<u32>::filled(2, 1).unwrap();
    v.extend_filled(3, 4).unwrap();
    panic_unless_eq!(vec![1, 1, 4, 4, 4], v.to_vec());

    v.set(0, 9).unwrap();
    panic_unless_eq!(9, v.at(0));
    panic_unless_eq!(None, v.get(5));
    panic_unless_eq!(vec![4, 4, 4, 1, 9], v.iter().rev().collect::<Vec<_>>());
}

#[test]
fn test_slice_access() {
    let v = IndexVec::<u8>::identity(5).unwrap();
    panic_unless_eq!(&[0u8, 1, 2, 3, 4], v.as_slice());
    panic_unless_eq!(2, v[1..].partition_point(|&x| x < 3));
    panic_unless_eq!(10, (&v).into_iter().sum::<usize>());
}
