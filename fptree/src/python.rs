use crate::fp::{fp_growth_with, MinimumSupport};
use numpy::ndarray::{Array1, Array2, ArrayView2};
use numpy::{IntoPyArray, PyArray1, PyArray2, PyReadonlyArray2};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

/// Rows of a 0/1 matrix as lists of column indices.
fn matrix_to_transactions(transactions: ArrayView2<i32>) -> Vec<Vec<usize>> {
    transactions
        .rows()
        .into_iter()
        .map(|row| {
            row.iter()
                .enumerate()
                .filter_map(|(item, &flag)| (flag != 0).then_some(item))
                .collect()
        })
        .collect()
}

#[pyfunction]
#[pyo3(name = "fp_growth")]
fn fp_growth_py<'py>(
    py: Python<'py>,
    transactions: PyReadonlyArray2<'py, i32>,
    min_support: f64,
) -> PyResult<Vec<(Bound<'py, PyArray2<usize>>, Bound<'py, PyArray1<u64>>)>> {
    let transaction_list = matrix_to_transactions(transactions.as_array());
    let patterns = fp_growth_with(&transaction_list, MinimumSupport::Fraction(min_support))
        .map_err(|e| PyValueError::new_err(e.to_string()))?;

    let mut result = Vec::new();

    for level in patterns.levels() {
        if level.is_empty() {
            continue;
        }

        let itemset_size = level.itemset_size;
        let data: Vec<usize> = level.iter_itemsets().flatten().copied().collect();

        let itemsets = Array2::from_shape_vec((level.len(), itemset_size), data)
            .map_err(|_| PyValueError::new_err("Failed to create array"))?;
        let supports = Array1::from_vec(level.supports().to_vec());

        result.push((itemsets.into_pyarray(py), supports.into_pyarray(py)));
    }

    Ok(result)
}

#[pymodule]
fn fptree(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(fp_growth_py, m)?)?;
    Ok(())
}
