// THEORY:
// The `core_modules` tree holds the algorithmic heart of the engine, layered
// leaf-first: single-color math (`color`), pairwise math (`metric`), per-image
// quantization and reduction (`palette`, `prominent`), the per-image record
// (`colorized`), and finally the collection-level ranking (`sorter`). Each layer
// only reaches downward; orchestration across images lives above, in `pipeline`
// and `batch`.

pub mod color;
pub mod colorized;
pub mod metric;
pub mod palette;
pub mod prominent;
pub mod sorter;
