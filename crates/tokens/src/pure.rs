//! Value keywords.

use crate::token::define_tokens;

define_tokens! {
	/// Keywords passed as a bare argument, such as `WITHSCORES` or `NX`.
	pub struct PureToken {
		RESET = "RESET" => ["ACL LOG"],
		SCHEDULE = "SCHEDULE" => ["BGSAVE"],
		BIT = "BIT" => ["BITCOUNT", "BITPOS"],
		BYTE = "BYTE" => ["BITCOUNT", "BITPOS"],
		FAIL = "FAIL" => ["BITFIELD"],
		SAT = "SAT" => ["BITFIELD"],
		WRAP = "WRAP" => ["BITFIELD"],
		AND = "AND" => ["BITOP"],
		NOT = "NOT" => ["BITOP"],
		OR = "OR" => ["BITOP"],
		XOR = "XOR" => ["BITOP"],
		LEFT = "LEFT" => ["BLMOVE", "BLMPOP", "LMOVE", "LMPOP"],
		RIGHT = "RIGHT" => ["BLMOVE", "BLMPOP", "LMOVE", "LMPOP"],
		MAX = "MAX" => [
			"BZMPOP",
			"TS.ADD",
			"TS.ALTER",
			"TS.CREATE",
			"TS.CREATERULE",
			"TS.MRANGE",
			"TS.MREVRANGE",
			"TS.RANGE",
			"TS.REVRANGE",
			"ZINTER",
			"ZINTERSTORE",
			"ZMPOP",
			"ZUNION",
			"ZUNIONSTORE",
		],
		MIN = "MIN" => [
			"BZMPOP",
			"TS.ADD",
			"TS.ALTER",
			"TS.CREATE",
			"TS.CREATERULE",
			"TS.MRANGE",
			"TS.MREVRANGE",
			"TS.RANGE",
			"TS.REVRANGE",
			"ZINTER",
			"ZINTERSTORE",
			"ZMPOP",
			"ZUNION",
			"ZUNIONSTORE",
		],
		NO = "NO" => ["CLIENT CACHING", "CLIENT KILL", "SCRIPT DEBUG"],
		YES = "YES" => ["CLIENT CACHING", "CLIENT KILL", "SCRIPT DEBUG"],
		MASTER = "MASTER" => ["CLIENT KILL", "CLIENT LIST"],
		NORMAL = "NORMAL" => ["CLIENT KILL", "CLIENT LIST"],
		PUBSUB = "PUBSUB" => ["CLIENT KILL", "CLIENT LIST"],
		REPLICA = "REPLICA" => ["CLIENT KILL", "CLIENT LIST"],
		SLAVE = "SLAVE" => ["CLIENT KILL"],
		OFF = "OFF" => ["CLIENT NO-EVICT", "CLIENT NO-TOUCH", "CLIENT REPLY", "CLIENT TRACKING"],
		ON = "ON" => ["CLIENT NO-EVICT", "CLIENT NO-TOUCH", "CLIENT REPLY", "CLIENT TRACKING"],
		ALL = "ALL" => ["CLIENT PAUSE"],
		WRITE = "WRITE" => ["CLIENT PAUSE"],
		SKIP = "SKIP" => ["CLIENT REPLY"],
		BCAST = "BCAST" => ["CLIENT TRACKING"],
		NOLOOP = "NOLOOP" => ["CLIENT TRACKING"],
		OPTIN = "OPTIN" => ["CLIENT TRACKING"],
		OPTOUT = "OPTOUT" => ["CLIENT TRACKING"],
		ERROR = "ERROR" => ["CLIENT UNBLOCK"],
		TIMEOUT = "TIMEOUT" => ["CLIENT UNBLOCK"],
		FORCE = "FORCE" => ["CLUSTER FAILOVER", "FAILOVER", "SHUTDOWN", "XCLAIM"],
		TAKEOVER = "TAKEOVER" => ["CLUSTER FAILOVER"],
		HARD = "HARD" => ["CLUSTER RESET"],
		SOFT = "SOFT" => ["CLUSTER RESET"],
		STABLE = "STABLE" => ["CLUSTER SETSLOT"],
		REPLACE = "REPLACE" => [
			"COPY",
			"FUNCTION LOAD",
			"FUNCTION RESTORE",
			"MIGRATE",
			"RESTORE",
			"RESTORE-ASKING",
		],
		GT = "GT" => ["EXPIRE", "EXPIREAT", "PEXPIRE", "PEXPIREAT", "ZADD"],
		LT = "LT" => ["EXPIRE", "EXPIREAT", "PEXPIRE", "PEXPIREAT", "ZADD"],
		NX = "NX" => [
			"EXPIRE",
			"EXPIREAT",
			"GEOADD",
			"JSON.SET",
			"PEXPIRE",
			"PEXPIREAT",
			"SET",
			"ZADD",
		],
		XX = "XX" => [
			"EXPIRE",
			"EXPIREAT",
			"GEOADD",
			"JSON.SET",
			"PEXPIRE",
			"PEXPIREAT",
			"SET",
			"ZADD",
		],
		ABORT = "ABORT" => ["FAILOVER", "SHUTDOWN"],
		ASYNC = "ASYNC" => ["FLUSHALL", "FLUSHDB", "FUNCTION FLUSH", "SCRIPT FLUSH"],
		SYNC = "SYNC" => ["FLUSHALL", "FLUSHDB", "FUNCTION FLUSH", "SCRIPT DEBUG", "SCRIPT FLUSH"],
		WITHCODE = "WITHCODE" => ["FUNCTION LIST"],
		APPEND = "APPEND" => ["FUNCTION RESTORE"],
		FLUSH = "FLUSH" => ["FUNCTION RESTORE"],
		CHANGE = "CH" => ["GEOADD", "ZADD"],
		FT = "FT" => [
			"GEODIST",
			"GEORADIUS",
			"GEORADIUSBYMEMBER",
			"GEORADIUSBYMEMBER_RO",
			"GEORADIUS_RO",
			"GEOSEARCH",
			"GEOSEARCHSTORE",
		],
		KM = "KM" => [
			"GEODIST",
			"GEORADIUS",
			"GEORADIUSBYMEMBER",
			"GEORADIUSBYMEMBER_RO",
			"GEORADIUS_RO",
			"GEOSEARCH",
			"GEOSEARCHSTORE",
		],
		M = "M" => [
			"GEODIST",
			"GEORADIUS",
			"GEORADIUSBYMEMBER",
			"GEORADIUSBYMEMBER_RO",
			"GEORADIUS_RO",
			"GEOSEARCH",
			"GEOSEARCHSTORE",
		],
		MI = "MI" => [
			"GEODIST",
			"GEORADIUS",
			"GEORADIUSBYMEMBER",
			"GEORADIUSBYMEMBER_RO",
			"GEORADIUS_RO",
			"GEOSEARCH",
			"GEOSEARCHSTORE",
		],
		ANY = "ANY" => [
			"GEORADIUS",
			"GEORADIUSBYMEMBER",
			"GEORADIUSBYMEMBER_RO",
			"GEORADIUS_RO",
			"GEOSEARCH",
			"GEOSEARCHSTORE",
		],
		ASC = "ASC" => [
			"GEORADIUS",
			"GEORADIUSBYMEMBER",
			"GEORADIUSBYMEMBER_RO",
			"GEORADIUS_RO",
			"GEOSEARCH",
			"GEOSEARCHSTORE",
			"SORT",
			"SORT_RO",
		],
		DESC = "DESC" => [
			"GEORADIUS",
			"GEORADIUSBYMEMBER",
			"GEORADIUSBYMEMBER_RO",
			"GEORADIUS_RO",
			"GEOSEARCH",
			"GEOSEARCHSTORE",
			"SORT",
			"SORT_RO",
		],
		WITHCOORD = "WITHCOORD" => [
			"GEORADIUS",
			"GEORADIUSBYMEMBER",
			"GEORADIUSBYMEMBER_RO",
			"GEORADIUS_RO",
			"GEOSEARCH",
		],
		WITHDIST = "WITHDIST" => [
			"GEORADIUS",
			"GEORADIUSBYMEMBER",
			"GEORADIUSBYMEMBER_RO",
			"GEORADIUS_RO",
			"GEOSEARCH",
		],
		WITHHASH = "WITHHASH" => [
			"GEORADIUS",
			"GEORADIUSBYMEMBER",
			"GEORADIUSBYMEMBER_RO",
			"GEORADIUS_RO",
			"GEOSEARCH",
		],
		STOREDIST = "STOREDIST" => ["GEOSEARCHSTORE"],
		PERSIST = "PERSIST" => ["GETEX"],
		WITHVALUES = "WITHVALUES" => ["HRANDFIELD"],
		IDX = "IDX" => ["LCS"],
		LEN = "LEN" => ["LCS"],
		WITHMATCHLEN = "WITHMATCHLEN" => ["LCS"],
		AFTER = "AFTER" => ["LINSERT"],
		BEFORE = "BEFORE" => ["LINSERT"],
		COPY = "COPY" => ["MIGRATE"],
		EMPTY_STRING = "" => ["MIGRATE"],
		ABSTTL = "ABSTTL" => ["RESTORE", "RESTORE-ASKING"],
		GET = "GET" => ["SET"],
		KEEPTTL = "KEEPTTL" => ["SET"],
		NOSAVE = "NOSAVE" => ["SHUTDOWN"],
		NOW = "NOW" => ["SHUTDOWN"],
		SAVE = "SAVE" => ["SHUTDOWN"],
		SORTING = "ALPHA" => ["SORT", "SORT_RO"],
		APPROXIMATELY = "~" => ["XADD", "XTRIM"],
		AUTO_ID = "*" => ["XADD"],
		EQUAL = "=" => ["XADD", "XTRIM"],
		MAXLEN = "MAXLEN" => ["XADD", "XTRIM"],
		MINID = "MINID" => ["XADD", "XTRIM"],
		NOMKSTREAM = "NOMKSTREAM" => ["XADD"],
		JUSTID = "JUSTID" => ["XAUTOCLAIM", "XCLAIM"],
		MKSTREAM = "MKSTREAM" => ["XGROUP CREATE"],
		NEW_ID = "$" => ["XGROUP CREATE", "XGROUP SETID"],
		FULL = "FULL" => ["XINFO STREAM"],
		NOACK = "NOACK" => ["XREADGROUP"],
		INCREMENT = "INCR" => ["ZADD"],
		WITHSCORES = "WITHSCORES" => [
			"ZDIFF",
			"ZINTER",
			"ZRANDMEMBER",
			"ZRANGE",
			"ZRANGEBYSCORE",
			"ZREVRANGE",
			"ZREVRANGEBYSCORE",
			"ZUNION",
		],
		SUM = "SUM" => [
			"TS.ADD",
			"TS.ALTER",
			"TS.CREATE",
			"TS.CREATERULE",
			"TS.MRANGE",
			"TS.MREVRANGE",
			"TS.RANGE",
			"TS.REVRANGE",
			"ZINTER",
			"ZINTERSTORE",
			"ZUNION",
			"ZUNIONSTORE",
		],
		BYLEX = "BYLEX" => ["ZRANGE", "ZRANGESTORE"],
		BYSCORE = "BYSCORE" => ["ZRANGE", "ZRANGESTORE"],
		REV = "REV" => ["ZRANGE", "ZRANGESTORE"],
		WITHSCORE = "WITHSCORE" => ["ZRANK", "ZREVRANK"],
		NONSCALING = "NONSCALING" => ["BF.INSERT", "BF.RESERVE"],
		ITEMS = "ITEMS" => ["BF.INFO", "BF.INSERT", "CF.INSERT", "CF.INSERTNX"],
		NOCREATE = "NOCREATE" => ["BF.INSERT", "CF.INSERT", "CF.INSERTNX"],
		CAPACITY = "CAPACITY" => ["BF.INFO"],
		EXPANSION = "EXPANSION" => ["BF.INFO"],
		FILTERS = "FILTERS" => ["BF.INFO"],
		SIZE = "SIZE" => ["BF.INFO"],
		WEIGHTS = "WEIGHTS" => ["CMS.MERGE"],
		WITHCOUNT = "WITHCOUNT" => ["TOPK.LIST"],
		COMPRESSION = "COMPRESSION" => ["TDIGEST.MERGE"],
		OVERRIDE = "OVERRIDE" => ["TDIGEST.MERGE"],
		BLOCK = "BLOCK" => ["TS.ADD", "TS.ALTER", "TS.CREATE"],
		COMPRESSED = "COMPRESSED" => ["TS.ADD", "TS.CREATE"],
		FIRST = "FIRST" => [
			"TS.ADD",
			"TS.ALTER",
			"TS.CREATE",
			"TS.CREATERULE",
			"TS.MRANGE",
			"TS.MREVRANGE",
			"TS.RANGE",
			"TS.REVRANGE",
		],
		LAST = "LAST" => [
			"TS.ADD",
			"TS.ALTER",
			"TS.CREATE",
			"TS.CREATERULE",
			"TS.MRANGE",
			"TS.MREVRANGE",
			"TS.RANGE",
			"TS.REVRANGE",
		],
		UNCOMPRESSED = "UNCOMPRESSED" => ["TS.ADD", "TS.CREATE", "TS.DECRBY", "TS.INCRBY"],
		AVG = "AVG" => ["TS.CREATERULE", "TS.MRANGE", "TS.MREVRANGE", "TS.RANGE", "TS.REVRANGE"],
		COUNT = "COUNT" => [
			"TS.CREATERULE",
			"TS.MRANGE",
			"TS.MREVRANGE",
			"TS.RANGE",
			"TS.REVRANGE",
		],
		RANGE = "RANGE" => [
			"TS.CREATERULE",
			"TS.MRANGE",
			"TS.MREVRANGE",
			"TS.RANGE",
			"TS.REVRANGE",
		],
		STD_P = "STD.P" => [
			"TS.CREATERULE",
			"TS.MRANGE",
			"TS.MREVRANGE",
			"TS.RANGE",
			"TS.REVRANGE",
		],
		STD_S = "STD.S" => [
			"TS.CREATERULE",
			"TS.MRANGE",
			"TS.MREVRANGE",
			"TS.RANGE",
			"TS.REVRANGE",
		],
		TWA = "TWA" => ["TS.CREATERULE", "TS.MRANGE", "TS.MREVRANGE", "TS.RANGE", "TS.REVRANGE"],
		VAR_P = "VAR.P" => [
			"TS.CREATERULE",
			"TS.MRANGE",
			"TS.MREVRANGE",
			"TS.RANGE",
			"TS.REVRANGE",
		],
		VAR_S = "VAR.S" => [
			"TS.CREATERULE",
			"TS.MRANGE",
			"TS.MREVRANGE",
			"TS.RANGE",
			"TS.REVRANGE",
		],
		BUCKETTIMESTAMP = "BUCKETTIMESTAMP" => [
			"TS.MRANGE",
			"TS.MREVRANGE",
			"TS.RANGE",
			"TS.REVRANGE",
		],
		EMPTY = "EMPTY" => ["TS.MRANGE", "TS.MREVRANGE", "TS.RANGE", "TS.REVRANGE"],
		FILTER_BY_VALUE = "FILTER_BY_VALUE" => [
			"TS.MRANGE",
			"TS.MREVRANGE",
			"TS.RANGE",
			"TS.REVRANGE",
		],
		GROUPBY = "GROUPBY" => ["TS.MRANGE", "TS.MREVRANGE"],
		SELECTED_LABELS = "SELECTED_LABELS" => ["TS.MGET", "TS.MRANGE", "TS.MREVRANGE"],
		WITHLABELS = "WITHLABELS" => ["TS.MGET", "TS.MRANGE", "TS.MREVRANGE"],
	}
}
