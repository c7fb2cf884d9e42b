use std::{any::type_name, marker::PhantomData, rc::Rc};

use crate::{
    aggregate::Aggregate,
    diagnostics::DiagnosticSink,
    executor::{Row, Rows},
};

/// Turns rows into `T` instances by pairing field names with row slots.
pub struct Materializer<T> {
    fields: Vec<String>,
    sink: Rc<dyn DiagnosticSink>,
    _target: PhantomData<fn() -> T>,
}

impl<T: Aggregate> Materializer<T> {
    pub fn new(fields: &[&str], sink: Rc<dyn DiagnosticSink>) -> Self {
        Self {
            fields: fields.iter().map(|f| f.to_string()).collect(),
            sink,
            _target: PhantomData,
        }
    }

    /// Pairs stop at the shorter of the field list and the row. Names `T`
    /// does not declare are reported and skipped; the instance is still built.
    pub fn materialize(&self, row: &Row<'_>) -> T {
        let mut target = T::default();
        for (name, slot) in self.fields.iter().zip(row.slots()) {
            if T::has_field(name) {
                target.set_field(name, slot);
            } else {
                self.sink.warn(&format!(
                    "{} has no field '{name}', skipping it",
                    type_name::<T>()
                ));
            }
        }
        target.post_populate();
        target
    }
}

/// Lazy aggregate sequence over a fresh evaluation.
pub struct Aggregates<'a, T> {
    rows: Rows<'a>,
    materializer: Materializer<T>,
}

impl<'a, T: Aggregate> Aggregates<'a, T> {
    pub fn new(rows: Rows<'a>, materializer: Materializer<T>) -> Self {
        Self { rows, materializer }
    }
}

impl<T: Aggregate> Iterator for Aggregates<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let row = self.rows.next()?;
        Some(self.materializer.materialize(&row))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.rows.size_hint()
    }
}
