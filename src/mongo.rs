// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Simple types of the document store: BSON values, driver types and GeoJSON geometries.

use crate::catalog::{TypeResolver, TYPE_CATALOG};
use crate::rules::Rule;
use crate::{names, Classification, SimpleTypeHolder, TypeError, TypeName};
use lazy_static::lazy_static;
use std::collections::HashSet;

const STORE_SIMPLE_TYPES: &[&str] = &[
    "org.bson.types.Binary",
    "com.mongodb.DBRef",
    "org.bson.types.Decimal128",
    "org.bson.Document",
    "org.bson.types.Code",
    "org.bson.types.CodeWScope",
    "org.bson.types.CodeWithScope",
    names::OBJECT_ID,
    "java.util.regex.Pattern",
    "org.bson.types.Symbol",
    "java.util.UUID",
    "org.bson.BsonBinary",
    "org.bson.BsonBoolean",
    "org.bson.BsonDateTime",
    "org.bson.BsonDbPointer",
    "org.bson.BsonDecimal128",
    "org.bson.BsonDocument",
    "org.bson.BsonDouble",
    "org.bson.BsonInt32",
    "org.bson.BsonInt64",
    "org.bson.BsonJavaScript",
    "org.bson.BsonJavaScriptWithScope",
    "org.bson.BsonObjectId",
    "org.bson.BsonRegularExpression",
    "org.bson.BsonString",
    "org.bson.BsonTimestamp",
    "com.mongodb.client.model.geojson.Geometry",
    "com.mongodb.client.model.geojson.GeometryCollection",
    "com.mongodb.client.model.geojson.LineString",
    "com.mongodb.client.model.geojson.MultiLineString",
    "com.mongodb.client.model.geojson.MultiPoint",
    "com.mongodb.client.model.geojson.MultiPolygon",
    "com.mongodb.client.model.geojson.Point",
    "com.mongodb.client.model.geojson.Polygon",
];

lazy_static! {
    /// Identifier types the store can fill in when a document is saved without an id.
    pub static ref AUTOGENERATED_ID_TYPES: HashSet<TypeName> = [
        names::OBJECT_ID,
        names::STRING,
        names::BIG_INTEGER,
    ]
    .into_iter()
    .map(TypeName::known)
    .collect();
}

lazy_static! {
    /// Holder enriched with the store's simple types.
    ///
    /// Enumerations are always simple. Types of the date/time API never are:
    /// they go through converters instead of being written as they are.
    pub static ref HOLDER: SimpleTypeHolder = SimpleTypeHolder::builder()
        .simple_types(STORE_SIMPLE_TYPES.iter().map(|name| TypeName::known(*name)))
        .rule(Rule::enums_are_simple())
        .rule(Rule::exclude_prefix(names::TIME_NAMESPACE))
        .build();
}

pub fn is_autogenerated_id_type(name: &str) -> bool {
    AUTOGENERATED_ID_TYPES.contains(name)
}

/// Whether the store writes values of `name` as they are, using the process-wide catalog.
pub fn is_simple(name: &str) -> Result<bool, TypeError> {
    let name = TypeName::new(name)?;
    is_simple_with(&name, &*TYPE_CATALOG)
}

/// Classify `name` with the store holder against a caller-supplied resolver.
pub fn is_simple_with(name: &TypeName, resolver: &dyn TypeResolver) -> Result<bool, TypeError> {
    HOLDER.is_simple(name, resolver)
}

/// Like [`is_simple`], also naming the rule that decided.
pub fn explain(name: &str) -> Result<Classification, TypeError> {
    let name = TypeName::new(name)?;
    HOLDER.explain(&name, &*TYPE_CATALOG)
}

#[cfg(test)]
pub(crate) fn store_simple_type_names() -> &'static [&'static str] {
    STORE_SIMPLE_TYPES
}
