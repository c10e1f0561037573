use numpy::ndarray::Array2;
use numpy::{IntoPyArray, PyArray2, PyReadonlyArray2};
use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::apriori::{run, DatasetBuilder};
use crate::config::{LiftPolicy, MiningConfig};
use crate::error::AprioriError;

type PyRule = (Vec<String>, Vec<String>, f64, f64, f64);

fn to_py_err(err: AprioriError) -> PyErr {
    match err {
        AprioriError::InvalidConfig { .. } => PyValueError::new_err(err.to_string()),
        other => PyRuntimeError::new_err(other.to_string()),
    }
}

/// Mine a one-hot transaction matrix.
///
/// Returns the final frequent itemsets as a one-hot `uint8` matrix, their
/// supports, the rules as `(antecedent, consequent, support, confidence,
/// lift)` tuples with column indices as labels, and whether the iteration
/// cap was hit.
#[pyfunction]
#[pyo3(signature = (transactions, min_support, min_confidence, min_lift=None, max_iterations=10, enforce_min_lift=false))]
fn apriori<'py>(
    py: Python<'py>,
    transactions: PyReadonlyArray2<'py, i32>,
    min_support: f64,
    min_confidence: f64,
    min_lift: Option<f64>,
    max_iterations: usize,
    enforce_min_lift: bool,
) -> PyResult<(Bound<'py, PyArray2<u8>>, Vec<f64>, Vec<PyRule>, bool)> {
    let transactions_view = transactions.as_array();
    let num_items = transactions_view.shape()[1];
    let dataset = DatasetBuilder::from_matrix(transactions_view);

    let mut config = MiningConfig::new(min_support, min_confidence).with_max_iterations(max_iterations);
    if let Some(min_lift) = min_lift {
        config = config.with_min_lift(min_lift);
    }
    if enforce_min_lift {
        config = config.with_lift_policy(LiftPolicy::Enforce);
    }

    let report = run(&dataset, &config).map_err(to_py_err)?;

    let frequent = report.outcome.frequent_itemsets();
    let mut data = vec![0u8; frequent.len() * num_items];
    for (i, itemset) in frequent.iter().enumerate() {
        for item in itemset.members() {
            data[i * num_items + item] = 1;
        }
    }
    let matrix = Array2::from_shape_vec((frequent.len(), num_items), data)
        .map_err(|_| PyValueError::new_err("Failed to create array"))?;

    let supports = report.itemsets.iter().map(|itemset| itemset.support).collect();
    let rules = report
        .itemsets
        .iter()
        .flat_map(|itemset| itemset.rules.iter())
        .map(|rule| {
            (
                rule.antecedent.clone(),
                rule.consequent.clone(),
                rule.support,
                rule.confidence,
                rule.lift,
            )
        })
        .collect();

    Ok((matrix.into_pyarray(py), supports, rules, report.warning.is_some()))
}

#[pymodule]
fn apriori_rules(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(apriori, m)?)?;
    Ok(())
}
