// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

use crate::intcode::{Label, Temp};

/// Allocates temporaries and labels.
///
/// The two counters are independent, start at zero and never hand out the
/// same index twice.
#[derive(Debug, Clone, Default)]
pub struct FreshNames {
    temps: u32,
    labels: u32,
}

impl FreshNames {
    /// Creates an allocator with both counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the next temporary.
    pub fn temp(&mut self) -> Temp {
        let temp = Temp(self.temps);
        self.temps += 1;
        temp
    }

    /// Returns the next label.
    pub fn label(&mut self) -> Label {
        let label = Label(self.labels);
        self.labels += 1;
        label
    }

    /// Number of temporaries handed out so far.
    pub fn temp_count(&self) -> u32 {
        self.temps
    }

    /// Number of labels handed out so far.
    pub fn label_count(&self) -> u32 {
        self.labels
    }
}
