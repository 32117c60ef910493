use crate::CodeBuilder;

use super::Structure;

/// The `//` attribution and GPL notice that opens every cbitcoin source file.
pub struct LicenseHeader<'a> {
    file_name: &'a str,
    structure: &'a Structure,
}

impl<'a> LicenseHeader<'a> {
    pub fn new(file_name: &'a str, structure: &'a Structure) -> Self {
        Self {
            file_name,
            structure,
        }
    }

    /// Append the header to `b`. The header ends with its last comment line.
    pub fn emit(&self, b: CodeBuilder) -> CodeBuilder {
        let s = self.structure;
        let project = s.project.as_str();

        b.line("//")
            .line(&format!("//  {}", self.file_name))
            .line(&format!("//  {}", project))
            .line("//")
            .line(&format!("//  Created by {} on {}.", s.author, s.date_stamp))
            .line(&format!("//  Copyright (c) {}", s.copyright))
            .line("//  ")
            .line(&format!("//  This file is part of {}.", project))
            .line("//")
            .line(&format!(
                "//  {} is free software: you can redistribute it and/or modify",
                project
            ))
            .line("//  it under the terms of the GNU General Public License as published by")
            .line("//  the Free Software Foundation, either version 3 of the License, or")
            .line("//  (at your option) any later version.")
            .line("//  ")
            .line(&format!(
                "//  {} is distributed in the hope that it will be useful,",
                project
            ))
            .line("//  but WITHOUT ANY WARRANTY; without even the implied warranty of")
            .line("//  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the")
            .line("//  GNU General Public License for more details.")
            .line("//  ")
            .line("//  You should have received a copy of the GNU General Public License")
            .line(&format!(
                "//  along with {}.  If not, see <http://www.gnu.org/licenses/>.",
                project
            ))
    }
}
