//! Every reply shape honors the three scripted outcomes: a stored error comes back
//! unchanged with a zero value, an unconfigured expectation fails with a zero value,
//! and a stored value comes back as-is.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use chrono::{DateTime, TimeZone, Utc};
use respmock_core::commands::{
    FunctionListQuery, GeoRadiusQuery, GeoSearchLocationQuery, LcsQuery, XAutoClaimArgs,
    XPendingExtArgs, XReadArgs,
};
use respmock_core::prelude::*;
use respmock_core::types::{
    ClusterLink, ClusterNode, ClusterShard, ClusterSlot, Function, GeoLocation, GeoPos, KeyFlags,
    KeyValue, LcsMatch, LcsMatchedPosition, LcsPosition, Library, ShardNode, SlotRange, SlowLog,
    XInfoConsumer, XInfoGroup, XInfoStream, XInfoStreamConsumer, XInfoStreamConsumerPending,
    XInfoStreamFull, XInfoStreamGroup, XInfoStreamGroupPending, XMessage, XPending, XPendingExt,
    XStream, Z, ZWithKey,
};
use respmock_testing::{ExpectedReply, MockError, MockHandle, new_mock};
use std::collections::{HashMap, HashSet};
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
#[error("scripted failure")]
struct ScriptedFailure;

/// Run the error / unconfigured / value scenarios for one command.
fn check_shape<T, B>(
    mock: &MockHandle,
    expected: impl Fn() -> B,
    actual: impl Fn() -> Reply<T>,
    configure: impl FnOnce(&B),
    want: T,
    configure_err: impl FnOnce(&B, Error),
) where
    T: ReplyShape + PartialEq,
    B: ExpectedReply<Shape = T>,
{
    let scripted = Error::custom(ScriptedFailure);

    mock.clear_expect();
    configure_err(&expected(), scripted.clone());
    let reply = actual();
    assert_eq!(reply.val(), &T::zero());
    assert_eq!(reply.result(), Err(scripted));

    mock.clear_expect();
    let _ = expected();
    let reply = actual();
    assert_eq!(reply.val(), &T::zero());
    let err = reply.result().unwrap_err();
    assert!(matches!(
        err.downcast_ref::<MockError>(),
        Some(MockError::Unconfigured { .. })
    ));

    mock.clear_expect();
    configure(&expected());
    assert_eq!(actual().result(), Ok(want));
    assert!(mock.expectations_were_met().is_ok());
}

fn at(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(secs, 0).unwrap()
}

#[test]
fn test_string() {
    let (client, mock) = new_mock();
    check_shape(
        &mock,
        || mock.expect_get("key"),
        || client.get("key"),
        |e| e.set_val("value"),
        "value".to_string(),
        |e, err| e.set_err(err),
    );
}

#[test]
fn test_status() {
    let (client, mock) = new_mock();
    check_shape(
        &mock,
        || mock.expect_set("key", "value", Some(Duration::from_secs(10))),
        || client.set("key", "value", Some(Duration::from_secs(10))),
        |e| e.set_val("OK"),
        "OK".to_string(),
        |e, err| e.set_err(err),
    );
}

#[test]
fn test_int() {
    let (client, mock) = new_mock();
    check_shape(
        &mock,
        || mock.expect_incr_by("counter", 10),
        || client.incr_by("counter", 10),
        |e| e.set_val(1024),
        1024,
        |e, err| e.set_err(err),
    );
}

#[test]
fn test_bool() {
    let (client, mock) = new_mock();
    check_shape(
        &mock,
        || mock.expect_set_nx("lock", "owner", Some(Duration::from_millis(1500))),
        || client.set_nx("lock", "owner", Some(Duration::from_millis(1500))),
        |e| e.set_val(true),
        true,
        |e, err| e.set_err(err),
    );
}

#[test]
fn test_float() {
    let (client, mock) = new_mock();
    check_shape(
        &mock,
        || mock.expect_zincr_by("board", 2.5, "ada"),
        || client.zincr_by("board", 2.5, "ada"),
        |e| e.set_val(12.5),
        12.5,
        |e, err| e.set_err(err),
    );
}

#[test]
fn test_duration() {
    let (client, mock) = new_mock();
    check_shape(
        &mock,
        || mock.expect_ttl("session"),
        || client.ttl("session"),
        |e| e.set_val(chrono::Duration::seconds(60)),
        chrono::Duration::seconds(60),
        |e, err| e.set_err(err),
    );
}

#[test]
fn test_time() {
    let (client, mock) = new_mock();
    check_shape(
        &mock,
        || mock.expect_time(),
        || client.time(),
        |e| e.set_val(at(1_700_000_000)),
        at(1_700_000_000),
        |e, err| e.set_err(err),
    );
}

#[test]
fn test_dynamic_value() {
    let (client, mock) = new_mock();
    let script = "return redis.call('GET', KEYS[1])";
    check_shape(
        &mock,
        || mock.expect_eval(script, &["key"], &[]),
        || client.eval(script, &["key"], &[]),
        |e| e.set_val(Value::from(vec![Value::from("a"), Value::from(1)])),
        Value::Array(vec![Value::Str("a".to_string()), Value::Int(1)]),
        |e, err| e.set_err(err),
    );
}

#[test]
fn test_slice() {
    let (client, mock) = new_mock();
    check_shape(
        &mock,
        || mock.expect_mget(&["a", "b"]),
        || client.mget(&["a", "b"]),
        |e| e.set_val(vec![Value::from("1"), Value::Nil]),
        vec![Value::from("1"), Value::Nil],
        |e, err| e.set_err(err),
    );
}

#[test]
fn test_string_slice() {
    let (client, mock) = new_mock();
    check_shape(
        &mock,
        || mock.expect_lrange("queue", 0, -1),
        || client.lrange("queue", 0, -1),
        |e| e.set_val(vec!["a".to_string(), "b".to_string()]),
        vec!["a".to_string(), "b".to_string()],
        |e, err| e.set_err(err),
    );
}

#[test]
fn test_int_slice() {
    let (client, mock) = new_mock();
    check_shape(
        &mock,
        || mock.expect_bit_field("bits", &["incrby", "u2", "100", "1"]),
        || client.bit_field("bits", &["incrby", "u2", "100", "1"]),
        |e| e.set_val(vec![1, 2]),
        vec![1, 2],
        |e, err| e.set_err(err),
    );
}

#[test]
fn test_float_slice() {
    let (client, mock) = new_mock();
    check_shape(
        &mock,
        || mock.expect_zmscore("board", &["ada", "bob"]),
        || client.zmscore("board", &["ada", "bob"]),
        |e| e.set_val(vec![1.5, 2.0]),
        vec![1.5, 2.0],
        |e, err| e.set_err(err),
    );
}

#[test]
fn test_bool_slice() {
    let (client, mock) = new_mock();
    check_shape(
        &mock,
        || mock.expect_smismember("tags", &["a", "b"]),
        || client.smismember("tags", &["a", "b"]),
        |e| e.set_val(vec![true, false]),
        vec![true, false],
        |e, err| e.set_err(err),
    );
}

#[test]
fn test_key_value_slice() {
    let (client, mock) = new_mock();
    let pairs = vec![KeyValue {
        key: "field".to_string(),
        value: "value".to_string(),
    }];
    check_shape(
        &mock,
        || mock.expect_hrand_field_with_values("hash", 1),
        || client.hrand_field_with_values("hash", 1),
        |e| e.set_val(pairs.clone()),
        pairs.clone(),
        |e, err| e.set_err(err),
    );
}

#[test]
fn test_map_string_string() {
    let (client, mock) = new_mock();
    let map = HashMap::from([("name".to_string(), "ada".to_string())]);
    check_shape(
        &mock,
        || mock.expect_hget_all("user:1"),
        || client.hget_all("user:1"),
        |e| e.set_val(map.clone()),
        map.clone(),
        |e, err| e.set_err(err),
    );
}

#[test]
fn test_map_string_int() {
    let (client, mock) = new_mock();
    let map = HashMap::from([("news".to_string(), 3)]);
    check_shape(
        &mock,
        || mock.expect_pubsub_numsub(&["news"]),
        || client.pubsub_numsub(&["news"]),
        |e| e.set_val(map.clone()),
        map.clone(),
        |e, err| e.set_err(err),
    );
}

#[test]
fn test_string_set() {
    let (client, mock) = new_mock();
    let set = HashSet::from(["a".to_string(), "b".to_string()]);
    check_shape(
        &mock,
        || mock.expect_smembers_map("tags"),
        || client.smembers_map("tags"),
        |e| e.set_val(set.clone()),
        set.clone(),
        |e, err| e.set_err(err),
    );
}

#[test]
fn test_scan() {
    let (client, mock) = new_mock();
    check_shape(
        &mock,
        || mock.expect_scan(0, "user:*", 10),
        || client.scan(0, "user:*", 10),
        |e| e.set_val(vec!["user:1".to_string(), "user:2".to_string()], 5_u64),
        (vec!["user:1".to_string(), "user:2".to_string()], 5),
        |e, err| e.set_err(err),
    );
}

#[test]
fn test_key_values() {
    let (client, mock) = new_mock();
    check_shape(
        &mock,
        || mock.expect_lmpop("left", 2, &["key1", "key2"]),
        || client.lmpop("left", 2, &["key1", "key2"]),
        |e| e.set_val("key1", vec!["v1".to_string(), "v2".to_string()]),
        ("key1".to_string(), vec!["v1".to_string(), "v2".to_string()]),
        |e, err| e.set_err(err),
    );
}

#[test]
fn test_z_slice_with_key() {
    let (client, mock) = new_mock();
    let members = vec![Z::new(100.0, "one"), Z::new(200.0, "two")];
    check_shape(
        &mock,
        || mock.expect_zmpop("max", 2, &["key1"]),
        || client.zmpop("max", 2, &["key1"]),
        |e| e.set_val("key1", members.clone()),
        ("key1".to_string(), members.clone()),
        |e, err| e.set_err(err),
    );
}

#[test]
fn test_x_message_slice() {
    let (client, mock) = new_mock();
    let messages = vec![XMessage::new("1-0", [("field", "value")])];
    check_shape(
        &mock,
        || mock.expect_xrange("events", "-", "+"),
        || client.xrange("events", "-", "+"),
        |e| e.set_val(messages.clone()),
        messages.clone(),
        |e, err| e.set_err(err),
    );
}

#[test]
fn test_x_stream_slice() {
    let (client, mock) = new_mock();
    let args = XReadArgs {
        streams: vec!["events".to_string(), "0".to_string()],
        count: Some(10),
        block: None,
    };
    let streams = vec![XStream {
        stream: "events".to_string(),
        messages: vec![XMessage::new("1-0", [("n", 1)])],
    }];
    check_shape(
        &mock,
        || mock.expect_xread(&args),
        || client.xread(&args),
        |e| e.set_val(streams.clone()),
        streams.clone(),
        |e, err| e.set_err(err),
    );
}

#[test]
fn test_x_pending() {
    let (client, mock) = new_mock();
    let pending = XPending {
        count: 2,
        lower: "1-0".to_string(),
        higher: "2-0".to_string(),
        consumers: HashMap::from([("worker".to_string(), 2)]),
    };
    check_shape(
        &mock,
        || mock.expect_xpending("events", "group"),
        || client.xpending("events", "group"),
        |e| e.set_val(pending.clone()),
        Some(pending.clone()),
        |e, err| e.set_err(err),
    );
}

#[test]
fn test_x_pending_ext() {
    let (client, mock) = new_mock();
    let args = XPendingExtArgs {
        stream: "events".to_string(),
        group: "group".to_string(),
        start: "-".to_string(),
        end: "+".to_string(),
        count: 10,
        ..XPendingExtArgs::default()
    };
    let rows = vec![XPendingExt {
        id: "1-0".to_string(),
        consumer: "worker".to_string(),
        idle: Duration::from_secs(30),
        retry_count: 1,
    }];
    check_shape(
        &mock,
        || mock.expect_xpending_ext(&args),
        || client.xpending_ext(&args),
        |e| e.set_val(rows.clone()),
        rows.clone(),
        |e, err| e.set_err(err),
    );
}

#[test]
fn test_x_auto_claim() {
    let (client, mock) = new_mock();
    let args = XAutoClaimArgs {
        stream: "events".to_string(),
        group: "group".to_string(),
        consumer: "worker".to_string(),
        min_idle: Duration::from_secs(60),
        start: "0".to_string(),
        count: Some(10),
    };
    let messages = vec![XMessage::new("1-0", [("field", "value")])];
    check_shape(
        &mock,
        || mock.expect_xautoclaim(&args),
        || client.xautoclaim(&args),
        |e| e.set_val(messages.clone(), "2-0"),
        (messages.clone(), "2-0".to_string()),
        |e, err| e.set_err(err),
    );
    check_shape(
        &mock,
        || mock.expect_xautoclaim_just_id(&args),
        || client.xautoclaim_just_id(&args),
        |e| e.set_val(vec!["1-0".to_string()], "2-0"),
        (vec!["1-0".to_string()], "2-0".to_string()),
        |e, err| e.set_err(err),
    );
}

#[test]
fn test_x_info_groups_and_consumers() {
    let (client, mock) = new_mock();
    let groups = vec![XInfoGroup {
        name: "group".to_string(),
        consumers: 1,
        pending: 2,
        last_delivered_id: "2-0".to_string(),
        entries_read: 2,
        lag: 0,
    }];
    check_shape(
        &mock,
        || mock.expect_xinfo_groups("events"),
        || client.xinfo_groups("events"),
        |e| e.set_val(groups.clone()),
        groups.clone(),
        |e, err| e.set_err(err),
    );

    let consumers = vec![XInfoConsumer {
        name: "worker".to_string(),
        pending: 2,
        idle: Duration::from_millis(800),
        inactive: Duration::from_millis(900),
    }];
    check_shape(
        &mock,
        || mock.expect_xinfo_consumers("events", "group"),
        || client.xinfo_consumers("events", "group"),
        |e| e.set_val(consumers.clone()),
        consumers.clone(),
        |e, err| e.set_err(err),
    );
}

#[test]
fn test_x_info_stream() {
    let (client, mock) = new_mock();
    let info = XInfoStream {
        length: 2,
        radix_tree_keys: 1,
        radix_tree_nodes: 2,
        groups: 1,
        last_generated_id: "2-0".to_string(),
        entries_added: 2,
        first_entry: XMessage::new("1-0", [("a", "1")]),
        last_entry: XMessage::new("2-0", [("b", "2")]),
        recorded_first_entry_id: "1-0".to_string(),
        ..XInfoStream::default()
    };
    check_shape(
        &mock,
        || mock.expect_xinfo_stream("events"),
        || client.xinfo_stream("events"),
        |e| e.set_val(info.clone()),
        Some(info.clone()),
        |e, err| e.set_err(err),
    );
}

#[test]
fn test_x_info_stream_full() {
    let (client, mock) = new_mock();
    let full = XInfoStreamFull {
        length: 3,
        radix_tree_keys: 4,
        radix_tree_nodes: 5,
        last_generated_id: "3-3".to_string(),
        max_deleted_entry_id: "0-0".to_string(),
        entries_added: 3,
        entries: vec![XMessage::new("1-1", [("key1", "val1"), ("key2", "val2")])],
        groups: vec![XInfoStreamGroup {
            name: "group1".to_string(),
            last_delivered_id: "10-10".to_string(),
            entries_read: 1,
            lag: 0,
            pel_count: 3,
            pending: vec![XInfoStreamGroupPending {
                id: "5-5".to_string(),
                consumer: "consumer1".to_string(),
                delivery_time: at(1_700_000_000),
                delivery_count: 7,
            }],
            consumers: vec![XInfoStreamConsumer {
                name: "consumer1".to_string(),
                seen_time: at(1_700_000_100),
                active_time: at(1_700_000_050),
                pel_count: 2,
                pending: vec![XInfoStreamConsumerPending {
                    id: "5-5".to_string(),
                    delivery_time: at(1_700_000_000),
                    delivery_count: 8,
                }],
            }],
        }],
        recorded_first_entry_id: "1-1".to_string(),
    };
    check_shape(
        &mock,
        || mock.expect_xinfo_stream_full("events", 10),
        || client.xinfo_stream_full("events", 10),
        |e| e.set_val(full.clone()),
        Some(full.clone()),
        |e, err| e.set_err(err),
    );
}

#[test]
fn test_z_with_key() {
    let (client, mock) = new_mock();
    let popped = ZWithKey {
        z: Z::new(3.0, "ada"),
        key: "board".to_string(),
    };
    check_shape(
        &mock,
        || mock.expect_bzpop_max(Duration::from_secs(1), &["board"]),
        || client.bzpop_max(Duration::from_secs(1), &["board"]),
        |e| e.set_val(popped.clone()),
        Some(popped.clone()),
        |e, err| e.set_err(err),
    );
}

#[test]
fn test_z_slice() {
    let (client, mock) = new_mock();
    let members = vec![Z::new(1.0, "ada"), Z::new(2.0, "bob")];
    check_shape(
        &mock,
        || mock.expect_zrange_with_scores("board", 0, -1),
        || client.zrange_with_scores("board", 0, -1),
        |e| e.set_val(members.clone()),
        members.clone(),
        |e, err| e.set_err(err),
    );
}

#[test]
fn test_cluster_slots() {
    let (client, mock) = new_mock();
    let slots = vec![ClusterSlot {
        start: 0,
        end: 5460,
        nodes: vec![ClusterNode {
            id: "e10b7051d6bf2d5febd39a2be297bbaea6084111".to_string(),
            addr: "127.0.0.1:30001".to_string(),
        }],
    }];
    check_shape(
        &mock,
        || mock.expect_cluster_slots(),
        || client.cluster_slots(),
        |e| e.set_val(slots.clone()),
        slots.clone(),
        |e, err| e.set_err(err),
    );
}

#[test]
fn test_cluster_links() {
    let (client, mock) = new_mock();
    let links = vec![
        ClusterLink {
            direction: "to".to_string(),
            node: "8149d745fa551e40764fecaf7cab9dbdf6b659ae".to_string(),
            create_time: 1_639_442_739_375,
            events: "rw".to_string(),
            send_buffer_allocated: 4512,
            send_buffer_used: 1254,
        },
        ClusterLink {
            direction: "from".to_string(),
            node: "8149d745fa551e40764fecaf7cab9dbdf6b659ae".to_string(),
            create_time: 1_639_442_739_411,
            events: "r".to_string(),
            send_buffer_allocated: 0,
            send_buffer_used: 0,
        },
    ];
    check_shape(
        &mock,
        || mock.expect_cluster_links(),
        || client.cluster_links(),
        |e| e.set_val(links.clone()),
        links.clone(),
        |e, err| e.set_err(err),
    );
}

#[test]
fn test_cluster_shards() {
    let (client, mock) = new_mock();
    let node = |id: &str, port: i64, role: &str| ShardNode {
        id: id.to_string(),
        endpoint: "127.0.0.1".to_string(),
        ip: "127.0.0.1".to_string(),
        hostname: "host".to_string(),
        port,
        tls_port: 1999,
        role: role.to_string(),
        replication_offset: 72156,
        health: "online".to_string(),
    };
    let shards = vec![ClusterShard {
        slots: vec![
            SlotRange { start: 0, end: 1999 },
            SlotRange {
                start: 4000,
                end: 5999,
            },
        ],
        nodes: vec![
            node("e10b7051d6bf2d5febd39a2be297bbaea6084111", 30001, "master"),
            node("fd20502fe1b32fc32c15b69b0a9537551f162f1f", 30002, "replica"),
        ],
    }];
    check_shape(
        &mock,
        || mock.expect_cluster_shards(),
        || client.cluster_shards(),
        |e| e.set_val(shards.clone()),
        shards.clone(),
        |e, err| e.set_err(err),
    );
}

#[test]
fn test_geo_locations() {
    let (client, mock) = new_mock();
    let locations = vec![GeoLocation {
        name: "Palermo".to_string(),
        longitude: 13.361_389,
        latitude: 38.115_556,
        dist: 190.4424,
        geo_hash: 3_479_099_956_230_698,
    }];

    let radius = GeoRadiusQuery {
        radius: 200.0,
        unit: "km".to_string(),
        with_dist: true,
        ..GeoRadiusQuery::default()
    };
    check_shape(
        &mock,
        || mock.expect_geo_radius("Sicily", 15.0, 37.0, &radius),
        || client.geo_radius("Sicily", 15.0, 37.0, &radius),
        |e| e.set_val(locations.clone()),
        locations.clone(),
        |e, err| e.set_err(err),
    );

    let search = GeoSearchLocationQuery {
        longitude: 15.0,
        latitude: 37.0,
        radius: 200.0,
        radius_unit: "km".to_string(),
        with_dist: true,
        ..GeoSearchLocationQuery::default()
    };
    check_shape(
        &mock,
        || mock.expect_geo_search_location("Sicily", &search),
        || client.geo_search_location("Sicily", &search),
        |e| e.set_val(locations.clone()),
        locations.clone(),
        |e, err| e.set_err(err),
    );
}

#[test]
fn test_geo_pos() {
    let (client, mock) = new_mock();
    let positions = vec![
        Some(GeoPos {
            longitude: 13.361_389,
            latitude: 38.115_556,
        }),
        None,
    ];
    check_shape(
        &mock,
        || mock.expect_geo_pos("Sicily", &["Palermo", "Atlantis"]),
        || client.geo_pos("Sicily", &["Palermo", "Atlantis"]),
        |e| e.set_val(positions.clone()),
        positions.clone(),
        |e, err| e.set_err(err),
    );
}

#[test]
fn test_slow_log() {
    let (client, mock) = new_mock();
    let entries = vec![SlowLog {
        id: 1,
        time: at(1_700_000_000),
        duration: Duration::from_micros(1200),
        args: vec!["keys".to_string(), "*".to_string()],
        client_addr: "127.0.0.1:6379".to_string(),
        client_name: "client_hi".to_string(),
    }];
    check_shape(
        &mock,
        || mock.expect_slow_log_get(10),
        || client.slow_log_get(10),
        |e| e.set_val(entries.clone()),
        entries.clone(),
        |e, err| e.set_err(err),
    );
}

#[test]
fn test_function_list() {
    let (client, mock) = new_mock();
    let function = |name: &str, description: &str, flags: &[&str]| Function {
        name: name.to_string(),
        description: description.to_string(),
        flags: flags.iter().map(ToString::to_string).collect(),
    };
    let libs = vec![
        Library {
            name: "lib1".to_string(),
            engine: "LUA".to_string(),
            functions: vec![function(
                "lib1func1",
                "lib1 func1 desc",
                &["no-writes", "allow-stale"],
            )],
            code: "test code 1".to_string(),
        },
        Library {
            name: "lib2".to_string(),
            engine: "LUA".to_string(),
            functions: vec![
                function("lib2func1", "lib2 func1 desc", &["no-writes", "allow-stale"]),
                function("lib2func2", "lib2 func2 desc", &["no-writes"]),
            ],
            code: "test code 2".to_string(),
        },
    ];
    let query = FunctionListQuery {
        library_name_pattern: "lib*".to_string(),
        with_code: true,
    };
    check_shape(
        &mock,
        || mock.expect_function_list(&query),
        || client.function_list(&query),
        |e| e.set_val(libs.clone()),
        libs.clone(),
        |e, err| e.set_err(err),
    );
}

#[test]
fn test_lcs() {
    let (client, mock) = new_mock();
    let query = LcsQuery {
        key1: "key1".to_string(),
        key2: "key2".to_string(),
        idx: true,
        ..LcsQuery::default()
    };
    let lcs = LcsMatch {
        match_string: String::new(),
        matches: vec![
            LcsMatchedPosition {
                key1: LcsPosition { start: 3, end: 5 },
                key2: LcsPosition { start: 1, end: 3 },
                match_len: 2,
            },
            LcsMatchedPosition {
                key1: LcsPosition { start: 5, end: 8 },
                key2: LcsPosition { start: 2, end: 5 },
                match_len: 3,
            },
        ],
        len: 3,
    };
    check_shape(
        &mock,
        || mock.expect_lcs(&query),
        || client.lcs(&query),
        |e| e.set_val(lcs.clone()),
        Some(lcs.clone()),
        |e, err| e.set_err(err),
    );
}

#[test]
fn test_key_flags() {
    let (client, mock) = new_mock();
    let flags = vec![
        KeyFlags {
            key: "test1".to_string(),
            flags: vec!["flag1".to_string(), "flag2".to_string()],
        },
        KeyFlags {
            key: "test2".to_string(),
            flags: vec!["flag3".to_string(), "flag4".to_string()],
        },
    ];
    check_shape(
        &mock,
        || mock.expect_command_get_keys_and_flags(&["lmove", "a", "b", "left", "right"]),
        || client.command_get_keys_and_flags(&["lmove", "a", "b", "left", "right"]),
        |e| e.set_val(flags.clone()),
        flags.clone(),
        |e, err| e.set_err(err),
    );
}

#[test]
fn test_raw_command() {
    let (client, mock) = new_mock();
    let raw = [Arg::from("OBJECT"), Arg::from("ENCODING"), Arg::from("key")];
    check_shape(
        &mock,
        || mock.expect_do(&raw),
        || client.do_command(&raw),
        |e| e.set_val("listpack"),
        Value::from("listpack"),
        |e, err| e.set_err(err),
    );
}

#[test]
fn test_reply_loaded_from_fixture() {
    let fixture = r#"[
        {"id": "1-0", "values": {"event": {"Str": "signup"}, "attempt": {"Int": 1}}},
        {"id": "2-0", "values": {"event": {"Str": "login"}}}
    ]"#;
    let messages: Vec<XMessage> = serde_json::from_str(fixture).expect("fixture should parse");

    let (client, mock) = new_mock();
    mock.expect_xrange("events", "-", "+").set_val(messages.clone());

    let got = client.xrange("events", "-", "+").result().unwrap();
    assert_eq!(got, messages);
    assert_eq!(got[0].values["attempt"], Value::Int(1));
}
