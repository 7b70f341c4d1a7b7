// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::TypeKind::{self, *};

type Entry = (&'static str, TypeKind, &'static [&'static str]);

const COMPARABLE_SERIALIZABLE: &[&str] = &["java.io.Serializable", "java.lang.Comparable"];
const NUMBER: &[&str] = &["java.lang.Number", "java.lang.Comparable"];
const TEMPORAL: &[&str] = &[
    "java.time.temporal.Temporal",
    "java.time.temporal.TemporalAdjuster",
    "java.io.Serializable",
];
const TEMPORAL_ACCESSOR: &[&str] = &["java.time.temporal.TemporalAccessor"];
const BSON_VALUE: &[&str] = &["org.bson.BsonValue"];
const GEOMETRY: &[&str] = &["com.mongodb.client.model.geojson.Geometry"];

/// Types every mapper knows about without being told.
pub(super) const WELL_KNOWN: &[Entry] = &[
    // Primitives.
    ("boolean", Primitive, &[]),
    ("byte", Primitive, &[]),
    ("char", Primitive, &[]),
    ("short", Primitive, &[]),
    ("int", Primitive, &[]),
    ("long", Primitive, &[]),
    ("float", Primitive, &[]),
    ("double", Primitive, &[]),
    ("void", Primitive, &[]),
    // Core language.
    ("java.lang.Object", Class, &[]),
    ("java.io.Serializable", Interface, &[]),
    ("java.lang.Comparable", Interface, &[]),
    ("java.lang.CharSequence", Interface, &[]),
    ("java.lang.Iterable", Interface, &[]),
    ("java.lang.Enum", Class, COMPARABLE_SERIALIZABLE),
    ("java.lang.Class", Class, &["java.io.Serializable"]),
    (
        "java.lang.String",
        Class,
        &[
            "java.lang.CharSequence",
            "java.lang.Comparable",
            "java.io.Serializable",
        ],
    ),
    ("java.lang.Boolean", Class, COMPARABLE_SERIALIZABLE),
    ("java.lang.Character", Class, COMPARABLE_SERIALIZABLE),
    ("java.lang.Number", Class, &["java.io.Serializable"]),
    ("java.lang.Byte", Class, NUMBER),
    ("java.lang.Short", Class, NUMBER),
    ("java.lang.Integer", Class, NUMBER),
    ("java.lang.Long", Class, NUMBER),
    ("java.lang.Float", Class, NUMBER),
    ("java.lang.Double", Class, NUMBER),
    ("java.lang.Void", Class, &[]),
    ("java.math.BigInteger", Class, NUMBER),
    ("java.math.BigDecimal", Class, NUMBER),
    // Utilities.
    ("java.util.Date", Class, COMPARABLE_SERIALIZABLE),
    ("java.sql.Timestamp", Class, &["java.util.Date"]),
    ("java.util.Locale", Class, &["java.io.Serializable"]),
    ("java.util.UUID", Class, COMPARABLE_SERIALIZABLE),
    ("java.util.Currency", Class, &["java.io.Serializable"]),
    ("java.util.regex.Pattern", Class, &["java.io.Serializable"]),
    ("java.net.URI", Class, COMPARABLE_SERIALIZABLE),
    ("java.net.URL", Class, &["java.io.Serializable"]),
    ("java.util.Optional", Class, &[]),
    ("java.util.Collection", Interface, &["java.lang.Iterable"]),
    ("java.util.List", Interface, &["java.util.Collection"]),
    ("java.util.Set", Interface, &["java.util.Collection"]),
    ("java.util.Map", Interface, &[]),
    ("java.util.ArrayList", Class, &["java.util.List"]),
    ("java.util.HashSet", Class, &["java.util.Set"]),
    ("java.util.HashMap", Class, &["java.util.Map"]),
    ("java.util.LinkedHashMap", Class, &["java.util.HashMap"]),
    // Date/time API.
    ("java.time.temporal.TemporalAccessor", Interface, &[]),
    (
        "java.time.temporal.Temporal",
        Interface,
        TEMPORAL_ACCESSOR,
    ),
    ("java.time.temporal.TemporalAdjuster", Interface, &[]),
    ("java.time.temporal.TemporalAmount", Interface, &[]),
    ("java.time.Instant", Class, TEMPORAL),
    ("java.time.LocalDate", Class, TEMPORAL),
    ("java.time.LocalTime", Class, TEMPORAL),
    ("java.time.LocalDateTime", Class, TEMPORAL),
    ("java.time.OffsetDateTime", Class, TEMPORAL),
    ("java.time.OffsetTime", Class, TEMPORAL),
    ("java.time.ZonedDateTime", Class, TEMPORAL),
    ("java.time.Year", Class, TEMPORAL),
    ("java.time.YearMonth", Class, TEMPORAL),
    ("java.time.MonthDay", Class, TEMPORAL_ACCESSOR),
    (
        "java.time.Duration",
        Class,
        &["java.time.temporal.TemporalAmount", "java.io.Serializable"],
    ),
    (
        "java.time.Period",
        Class,
        &["java.time.temporal.TemporalAmount", "java.io.Serializable"],
    ),
    ("java.time.ZoneId", Class, &["java.io.Serializable"]),
    ("java.time.ZoneOffset", Class, &["java.time.ZoneId"]),
    ("java.time.DayOfWeek", Enum, &["java.lang.Enum"]),
    ("java.time.Month", Enum, &["java.lang.Enum"]),
    // Kotlin.
    ("kotlin.Unit", Class, &[]),
    // BSON.
    ("org.bson.conversions.Bson", Interface, &[]),
    (
        "org.bson.Document",
        Class,
        &["java.util.Map", "org.bson.conversions.Bson", "java.io.Serializable"],
    ),
    ("org.bson.types.ObjectId", Class, COMPARABLE_SERIALIZABLE),
    ("org.bson.types.Binary", Class, &["java.io.Serializable"]),
    ("org.bson.types.Decimal128", Class, NUMBER),
    ("org.bson.types.Code", Class, &["java.io.Serializable"]),
    ("org.bson.types.CodeWScope", Class, &["org.bson.types.Code"]),
    ("org.bson.types.CodeWithScope", Class, &["org.bson.types.Code"]),
    ("org.bson.types.Symbol", Class, &["java.io.Serializable"]),
    ("org.bson.types.MinKey", Class, &["java.io.Serializable"]),
    ("org.bson.types.MaxKey", Class, &["java.io.Serializable"]),
    ("org.bson.BsonValue", Class, &[]),
    ("org.bson.BsonNumber", Class, BSON_VALUE),
    ("org.bson.BsonBinary", Class, BSON_VALUE),
    ("org.bson.BsonBoolean", Class, BSON_VALUE),
    ("org.bson.BsonDateTime", Class, BSON_VALUE),
    ("org.bson.BsonDbPointer", Class, BSON_VALUE),
    ("org.bson.BsonDecimal128", Class, &["org.bson.BsonNumber"]),
    (
        "org.bson.BsonDocument",
        Class,
        &["org.bson.BsonValue", "java.util.Map", "org.bson.conversions.Bson"],
    ),
    ("org.bson.BsonArray", Class, &["org.bson.BsonValue", "java.util.List"]),
    ("org.bson.BsonDouble", Class, &["org.bson.BsonNumber"]),
    ("org.bson.BsonInt32", Class, &["org.bson.BsonNumber"]),
    ("org.bson.BsonInt64", Class, &["org.bson.BsonNumber"]),
    ("org.bson.BsonJavaScript", Class, BSON_VALUE),
    ("org.bson.BsonJavaScriptWithScope", Class, BSON_VALUE),
    ("org.bson.BsonObjectId", Class, BSON_VALUE),
    ("org.bson.BsonRegularExpression", Class, BSON_VALUE),
    ("org.bson.BsonString", Class, BSON_VALUE),
    ("org.bson.BsonSymbol", Class, BSON_VALUE),
    ("org.bson.BsonTimestamp", Class, BSON_VALUE),
    ("org.bson.BsonNull", Class, BSON_VALUE),
    // Driver.
    ("com.mongodb.DBRef", Class, &["java.io.Serializable"]),
    ("com.mongodb.client.model.geojson.Geometry", Class, &[]),
    ("com.mongodb.client.model.geojson.Point", Class, GEOMETRY),
    ("com.mongodb.client.model.geojson.MultiPoint", Class, GEOMETRY),
    ("com.mongodb.client.model.geojson.LineString", Class, GEOMETRY),
    (
        "com.mongodb.client.model.geojson.MultiLineString",
        Class,
        GEOMETRY,
    ),
    ("com.mongodb.client.model.geojson.Polygon", Class, GEOMETRY),
    ("com.mongodb.client.model.geojson.MultiPolygon", Class, GEOMETRY),
    (
        "com.mongodb.client.model.geojson.GeometryCollection",
        Class,
        GEOMETRY,
    ),
];
