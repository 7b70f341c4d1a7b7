// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

mod classification;
mod concurrency;
