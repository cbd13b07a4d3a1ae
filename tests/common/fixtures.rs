//! Static upstream payloads used across harnesses.
//!
//! These mirror real responses from the F-C0032-001 dataset, trimmed to two
//! periods and with the `result.fields` schema block shortened.

/// Successful response for 臺北市 with the five elements the dataset
/// actually publishes (no `WS`).
pub const TAIPEI_RESPONSE_JSON: &str = r#"{
  "success": "true",
  "result": {
    "resource_id": "F-C0032-001",
    "fields": [
      {"id": "datasetDescription", "type": "String"},
      {"id": "locationName", "type": "String"}
    ]
  },
  "records": {
    "datasetDescription": "三十六小時天氣預報",
    "location": [
      {
        "locationName": "臺北市",
        "weatherElement": [
          {
            "elementName": "Wx",
            "time": [
              {"startTime": "2026-10-17 18:00:00", "endTime": "2026-10-18 06:00:00",
               "parameter": {"parameterName": "多雲時陰", "parameterValue": "5"}},
              {"startTime": "2026-10-18 06:00:00", "endTime": "2026-10-18 18:00:00",
               "parameter": {"parameterName": "多雲", "parameterValue": "4"}}
            ]
          },
          {
            "elementName": "PoP",
            "time": [
              {"startTime": "2026-10-17 18:00:00", "endTime": "2026-10-18 06:00:00",
               "parameter": {"parameterName": "20", "parameterUnit": "百分比"}},
              {"startTime": "2026-10-18 06:00:00", "endTime": "2026-10-18 18:00:00",
               "parameter": {"parameterName": "10", "parameterUnit": "百分比"}}
            ]
          },
          {
            "elementName": "MinT",
            "time": [
              {"startTime": "2026-10-17 18:00:00", "endTime": "2026-10-18 06:00:00",
               "parameter": {"parameterName": "21", "parameterUnit": "C"}},
              {"startTime": "2026-10-18 06:00:00", "endTime": "2026-10-18 18:00:00",
               "parameter": {"parameterName": "22", "parameterUnit": "C"}}
            ]
          },
          {
            "elementName": "CI",
            "time": [
              {"startTime": "2026-10-17 18:00:00", "endTime": "2026-10-18 06:00:00",
               "parameter": {"parameterName": "舒適"}},
              {"startTime": "2026-10-18 06:00:00", "endTime": "2026-10-18 18:00:00",
               "parameter": {"parameterName": "舒適至悶熱"}}
            ]
          },
          {
            "elementName": "MaxT",
            "time": [
              {"startTime": "2026-10-17 18:00:00", "endTime": "2026-10-18 06:00:00",
               "parameter": {"parameterName": "24", "parameterUnit": "C"}},
              {"startTime": "2026-10-18 06:00:00", "endTime": "2026-10-18 18:00:00",
               "parameter": {"parameterName": "29", "parameterUnit": "C"}}
            ]
          }
        ]
      }
    ]
  }
}"#;

/// Body the upstream returns for a bad `Authorization` value.
pub const UNAUTHORIZED_BODY: &str = r#"{"message":"Unauthorized"}"#;
