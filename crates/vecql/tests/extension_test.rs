//! Tests against the real sqlite-vec extension
//!
//! Enable with `--features has-vector-extension` and point
//! `SQLITE_VEC_EXTENSION_PATH` at a `vec0` binary from
//! <https://github.com/asg017/sqlite-vec/releases>.

#[cfg(feature = "has-vector-extension")]
mod with_extension {
    use rusqlite::Connection;
    use vecql::expr::{distance_cosine, distance_l2, length};
    use vecql::{dml, shadow_table, KnnQuery, SqlFragment, Value, VecConnectionExt};
    use vecql_core::{ExtensionConfig, VecqlError};

    fn setup_db() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        let mut config = ExtensionConfig::new();
        if let Ok(path) = std::env::var("SQLITE_VEC_EXTENSION_PATH") {
            config = config.with_path(path);
        }
        conn.load_vec_extension(&config)
            .unwrap_or_else(|e| {
                panic!("Failed to load sqlite-vec (set SQLITE_VEC_EXTENSION_PATH): {}", e)
            });
        conn
    }

    #[test]
    fn test_extension_loaded() {
        let conn = setup_db();
        assert!(conn.has_vec_support());
        assert!(!conn.vec_version().unwrap().is_empty());
    }

    #[test]
    fn test_knn_roundtrip() {
        let conn = setup_db();
        let table = shadow_table("items_vec", "id", "embedding", 4);
        conn.execute_batch(&table.render_create()).unwrap();

        let rows = vec![
            dml::row([
                ("id", Value::from(1)),
                ("embedding", Value::from(vec![1.0, 0.0, 0.0, 0.0])),
            ]),
            dml::row([
                ("id", Value::from(2)),
                ("embedding", Value::from(vec![0.0, 1.0, 0.0, 0.0])),
            ]),
            dml::row([
                ("id", Value::from(3)),
                ("embedding", Value::from(vec![0.9, 0.1, 0.0, 0.0])),
            ]),
        ];
        dml::insert_many(&table, &rows).unwrap().execute(&conn).unwrap();

        let results = KnnQuery::new(&table, "embedding", &[1.0, 0.0, 0.0, 0.0], 2)
            .build()
            .query_knn(&conn)
            .unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].rowid, 1);
        assert_eq!(results[1].rowid, 3);

        conn.execute_batch(&table.render_drop()).unwrap();
    }

    #[test]
    fn test_functions_evaluate() {
        let conn = setup_db();
        let select =
            |f: SqlFragment| SqlFragment::new(format!("SELECT {}", f.sql()), f.params().to_vec());

        let len = select(length(vec![1.0, 2.0, 3.0]))
            .query_map(&conn, |r| r.get::<_, i64>(0))
            .unwrap();
        assert_eq!(len, vec![3]);

        let d = select(distance_l2(vec![0.0, 0.0], vec![3.0, 4.0]))
            .query_map(&conn, |r| r.get::<_, f64>(0))
            .unwrap();
        assert!((d[0] - 5.0).abs() < 1e-6);

        let c = select(distance_cosine(vec![1.0, 0.0], vec![1.0, 0.0]))
            .query_map(&conn, |r| r.get::<_, f64>(0))
            .unwrap();
        assert!(c[0].abs() < 1e-6);
    }

    #[test]
    fn test_dimension_mismatch_reported_by_engine() {
        let conn = setup_db();
        let table = shadow_table("items_vec", "id", "embedding", 4);
        conn.execute_batch(&table.render_create()).unwrap();

        let err = KnnQuery::new(&table, "embedding", &[1.0, 0.0], 1)
            .build()
            .query_knn(&conn)
            .unwrap_err();
        assert!(matches!(err, VecqlError::Database(_)));
    }
}
