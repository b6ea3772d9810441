//! Static lookup tables for I/O-related imports and parameter types.

/// Standard-library packages that perform I/O. Matched exactly or as a
/// `/`-delimited prefix (`os` covers `os/exec`).
const STD_IO_PACKAGES: &[&str] = &[
    "net/http",
    "net/rpc",
    "net/smtp",
    "database/sql",
    "os",
    "io",
    "bufio",
    "syscall",
    "crypto/tls",
    "log/syslog",
];

/// Matched exactly only: `net/url` and `net/netip` are pure parsing.
const STD_IO_EXACT: &[&str] = &["net"];

/// Third-party module prefixes for network, database, RPC and web frameworks.
const EXTERNAL_IO_PREFIXES: &[&str] = &[
    // Web frameworks and routers
    "github.com/gin-gonic/gin",
    "github.com/labstack/echo",
    "github.com/gofiber/fiber",
    "github.com/gorilla/mux",
    "github.com/gorilla/websocket",
    "github.com/go-chi/chi",
    "github.com/julienschmidt/httprouter",
    "github.com/valyala/fasthttp",
    // RPC
    "google.golang.org/grpc",
    "github.com/twitchtv/twirp",
    "connectrpc.com/connect",
    // SQL drivers and ORMs
    "github.com/jackc/pgx",
    "github.com/lib/pq",
    "github.com/go-sql-driver/mysql",
    "github.com/mattn/go-sqlite3",
    "github.com/jmoiron/sqlx",
    "gorm.io/gorm",
    "entgo.io/ent",
    // Document, key-value and search stores
    "go.mongodb.org/mongo-driver",
    "github.com/redis/go-redis",
    "github.com/go-redis/redis",
    "github.com/elastic/go-elasticsearch",
    "go.etcd.io/etcd",
    // Messaging
    "github.com/segmentio/kafka-go",
    "github.com/IBM/sarama",
    "github.com/Shopify/sarama",
    "github.com/nats-io/nats.go",
    "github.com/rabbitmq/amqp091-go",
    "github.com/streadway/amqp",
    // Cloud SDKs
    "github.com/aws/aws-sdk-go",
    "github.com/aws/aws-sdk-go-v2",
    "cloud.google.com/go",
];

/// Parameter types that carry I/O, after stripping pointers and slices.
const IO_PARAM_TYPES: &[&str] = &[
    "http.Request",
    "http.ResponseWriter",
    "http.Client",
    "sql.DB",
    "sql.Tx",
    "sql.Conn",
    "sql.Rows",
    "io.Reader",
    "io.Writer",
    "io.ReadCloser",
    "io.WriteCloser",
    "io.ReadWriter",
    "io.ReadWriteCloser",
    "bufio.Reader",
    "bufio.Writer",
    "os.File",
    "net.Conn",
    "net.Listener",
    "gin.Context",
    "echo.Context",
    "fiber.Ctx",
    "grpc.ClientConn",
    "grpc.Server",
    "grpc.ServerStream",
    "pgx.Conn",
    "pgxpool.Pool",
    "sqlx.DB",
    "sqlx.Tx",
    "gorm.DB",
    "mongo.Client",
    "mongo.Database",
    "mongo.Collection",
    "redis.Client",
    "websocket.Conn",
    "kafka.Reader",
    "kafka.Writer",
];

/// `import == pkg` or `import` lives under `pkg/`.
fn matches_package(import: &str, pkg: &str) -> bool {
    import == pkg
        || import
            .strip_prefix(pkg)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Whether `import` is a standard-library I/O package.
pub fn is_std_io_import(import: &str) -> bool {
    STD_IO_EXACT.contains(&import) || STD_IO_PACKAGES.iter().any(|pkg| matches_package(import, pkg))
}

/// Whether `import` is a known third-party I/O dependency. Major-version
/// suffixes (`/v5`) are covered by the prefix match.
pub fn is_external_io_import(import: &str) -> bool {
    EXTERNAL_IO_PREFIXES
        .iter()
        .any(|prefix| matches_package(import, prefix))
}

/// Whether a parameter type (as written) carries I/O.
pub fn is_io_param_type(type_name: &str) -> bool {
    let mut ty = type_name.trim();
    ty = ty.strip_prefix("...").unwrap_or(ty);
    loop {
        if let Some(rest) = ty.strip_prefix('*') {
            ty = rest.trim_start();
        } else if let Some(rest) = ty.strip_prefix("[]") {
            ty = rest.trim_start();
        } else {
            break;
        }
    }
    IO_PARAM_TYPES.contains(&ty)
}
