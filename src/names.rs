// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Qualified names of the well-known types the classifier refers to directly.

pub const OBJECT: &str = "java.lang.Object";
pub const ENUM: &str = "java.lang.Enum";
pub const STRING: &str = "java.lang.String";
pub const BIG_INTEGER: &str = "java.math.BigInteger";
pub const KOTLIN_UNIT: &str = "kotlin.Unit";

pub const OBJECT_ID: &str = "org.bson.types.ObjectId";

/// Namespace of the core language types.
pub const LANG_NAMESPACE: &str = "java.lang";

/// Namespace of the date/time API. The store profile refuses to treat these as simple.
pub const TIME_NAMESPACE: &str = "java.time";
