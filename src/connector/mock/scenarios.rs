//! Pre-built device scenarios for testing.
//!
//! The replies below are trimmed captures of `| display xml` output from an
//! MX-class router, kept close to what the device sends (namespaces, junos
//! attributes, whitespace around values) so decoding is tested against the
//! real shape of the data.

use super::channel::MockChannel;
use crate::rpc::commands::{self, with_xml_output};

pub const SYSTEM_ALARMS: &str = r#"<rpc-reply xmlns:junos="http://xml.juniper.net/junos/18.2R1/junos">
    <alarm-information xmlns="http://xml.juniper.net/junos/18.2R1/junos-alarm">
        <alarm-summary>
            <active-alarm-count>1</active-alarm-count>
        </alarm-summary>
        <alarm-detail>
            <alarm-time junos:seconds="1538035315">
                2018-09-27 08:01:55 UTC
            </alarm-time>
            <alarm-class>Minor</alarm-class>
            <alarm-description>Rescue configuration is not set</alarm-description>
            <alarm-short-description>no-rescue</alarm-short-description>
            <alarm-type>Configuration</alarm-type>
        </alarm-detail>
    </alarm-information>
    <cli>
        <banner></banner>
    </cli>
</rpc-reply>
"#;

pub const CHASSIS_ALARMS: &str = r#"<rpc-reply xmlns:junos="http://xml.juniper.net/junos/18.2R1/junos">
    <alarm-information xmlns="http://xml.juniper.net/junos/18.2R1/junos-alarm">
        <alarm-summary>
            <active-alarm-count>3</active-alarm-count>
        </alarm-summary>
        <alarm-detail>
            <alarm-time junos:seconds="1538035400">2018-09-27 08:03:20 UTC</alarm-time>
            <alarm-class>Major</alarm-class>
            <alarm-description>FPC 0 Major Errors</alarm-description>
            <alarm-short-description>FPC 0 Major Errors</alarm-short-description>
            <alarm-type>Chassis</alarm-type>
        </alarm-detail>
        <alarm-detail>
            <alarm-time junos:seconds="1538035401">2018-09-27 08:03:21 UTC</alarm-time>
            <alarm-class>Major</alarm-class>
            <alarm-description>Fan Tray 0 Failure</alarm-description>
            <alarm-short-description>Fan Tray 0 Fail</alarm-short-description>
            <alarm-type>Chassis</alarm-type>
        </alarm-detail>
        <alarm-detail>
            <alarm-time junos:seconds="1538035402">2018-09-27 08:03:22 UTC</alarm-time>
            <alarm-class>Minor</alarm-class>
            <alarm-description>Loss of communication with Backup RE</alarm-description>
            <alarm-short-description>Backup RE comm</alarm-short-description>
            <alarm-type>Chassis</alarm-type>
        </alarm-detail>
    </alarm-information>
</rpc-reply>
"#;

pub const INTERFACES: &str = r#"<rpc-reply xmlns:junos="http://xml.juniper.net/junos/18.2R1/junos">
    <interface-information xmlns="http://xml.juniper.net/junos/18.2R1/junos-interface" junos:style="normal">
        <physical-interface>
            <name>
ge-0/0/0
</name>
            <admin-status junos:format="Enabled">
up
</admin-status>
            <oper-status>
up
</oper-status>
            <description>
uplink core1
</description>
            <current-physical-address>
00:05:86:71:1a:c0
</current-physical-address>
            <traffic-statistics junos:style="verbose">
                <input-bytes>
123456789
</input-bytes>
                <input-bps>0</input-bps>
                <output-bytes>
987654321
</output-bytes>
                <output-bps>0</output-bps>
            </traffic-statistics>
            <input-error-list>
                <input-errors>3</input-errors>
                <input-drops>7</input-drops>
                <framing-errors>0</framing-errors>
            </input-error-list>
            <output-error-list>
                <carrier-transitions>1</carrier-transitions>
                <output-errors>0</output-errors>
                <output-drops>2</output-drops>
            </output-error-list>
            <logical-interface>
                <name>
ge-0/0/0.0
</name>
                <description>
uplink unit
</description>
                <traffic-statistics junos:style="verbose">
                    <input-bytes>1000</input-bytes>
                    <output-bytes>2000</output-bytes>
                </traffic-statistics>
            </logical-interface>
        </physical-interface>
        <physical-interface>
            <name>ge-0/0/1</name>
            <admin-status junos:format="Enabled">up</admin-status>
            <oper-status>down</oper-status>
            <current-physical-address>00:05:86:71:1a:c1</current-physical-address>
            <traffic-statistics junos:style="verbose">
                <input-bytes>0</input-bytes>
                <output-bytes>0</output-bytes>
            </traffic-statistics>
            <input-error-list>
                <input-errors>0</input-errors>
                <input-drops>0</input-drops>
            </input-error-list>
            <output-error-list>
                <output-errors>0</output-errors>
                <output-drops>0</output-drops>
            </output-error-list>
        </physical-interface>
        <physical-interface>
            <name>lo0</name>
            <admin-status junos:format="Enabled">up</admin-status>
            <oper-status>up</oper-status>
            <traffic-statistics junos:style="verbose">
                <input-bytes>500</input-bytes>
                <output-bytes>500</output-bytes>
            </traffic-statistics>
            <logical-interface>
                <name>lo0.0</name>
                <traffic-statistics junos:style="verbose">
                    <input-bytes>500</input-bytes>
                    <output-bytes>500</output-bytes>
                </traffic-statistics>
            </logical-interface>
        </physical-interface>
    </interface-information>
</rpc-reply>
"#;

pub const BGP_SUMMARY: &str = r#"<rpc-reply xmlns:junos="http://xml.juniper.net/junos/18.2R1/junos">
    <bgp-information xmlns="http://xml.juniper.net/junos/18.2R1/junos-routing">
        <group-count>2</group-count>
        <peer-count>3</peer-count>
        <down-peer-count>1</down-peer-count>
        <bgp-rib junos:style="brief">
            <name>inet.0</name>
            <total-prefix-count>120</total-prefix-count>
            <received-prefix-count>120</received-prefix-count>
            <accepted-prefix-count>100</accepted-prefix-count>
            <active-prefix-count>98</active-prefix-count>
        </bgp-rib>
        <bgp-peer junos:style="terse" heading="Peer                     AS      InPkt     OutPkt    OutQ   Flaps Last Up/Dwn State|#Active/Received/Accepted/Damped...">
            <peer-address>192.0.2.1</peer-address>
            <peer-as>65001</peer-as>
            <input-messages>1234</input-messages>
            <output-messages>1200</output-messages>
            <route-queue-count>0</route-queue-count>
            <flap-count>3</flap-count>
            <elapsed-time junos:seconds="2938547">4w6d 0:15:47</elapsed-time>
            <peer-state junos:format="Establ">Established</peer-state>
            <bgp-rib junos:style="terse">
                <name>inet.0</name>
                <active-prefix-count>98</active-prefix-count>
                <received-prefix-count>120</received-prefix-count>
                <accepted-prefix-count>100</accepted-prefix-count>
                <suppressed-prefix-count>20</suppressed-prefix-count>
            </bgp-rib>
        </bgp-peer>
        <bgp-peer junos:style="terse">
            <peer-address>2001:db8::2</peer-address>
            <peer-as>65002</peer-as>
            <input-messages>10</input-messages>
            <output-messages>12</output-messages>
            <route-queue-count>0</route-queue-count>
            <flap-count>12</flap-count>
            <elapsed-time junos:seconds="3600">1:00:00</elapsed-time>
            <peer-state>Active</peer-state>
        </bgp-peer>
        <bgp-peer junos:style="terse">
            <peer-address>198.51.100.7</peer-address>
            <peer-as>65003</peer-as>
            <input-messages>880</input-messages>
            <output-messages>901</output-messages>
            <route-queue-count>0</route-queue-count>
            <flap-count>0</flap-count>
            <elapsed-time junos:seconds="86400">1d 0:00:00</elapsed-time>
            <peer-state junos:format="Establ">Established</peer-state>
            <bgp-rib junos:style="terse">
                <name>inet.0</name>
                <active-prefix-count>40</active-prefix-count>
                <received-prefix-count>50</received-prefix-count>
                <accepted-prefix-count>45</accepted-prefix-count>
                <suppressed-prefix-count>5</suppressed-prefix-count>
            </bgp-rib>
            <bgp-rib junos:style="terse">
                <name>inet6.0</name>
                <active-prefix-count>6</active-prefix-count>
                <received-prefix-count>9</received-prefix-count>
                <accepted-prefix-count>7</accepted-prefix-count>
                <suppressed-prefix-count>2</suppressed-prefix-count>
            </bgp-rib>
        </bgp-peer>
    </bgp-information>
</rpc-reply>
"#;

pub const OSPF3_OVERVIEW: &str = r#"<rpc-reply xmlns:junos="http://xml.juniper.net/junos/18.2R1/junos">
    <ospf3-overview-information xmlns="http://xml.juniper.net/junos/18.2R1/junos-routing">
        <ospf-overview>
            <instance-name>master</instance-name>
            <ospf-router-id>10.0.0.1</ospf-router-id>
            <ospf-area-overview>
                <ospf-area>0.0.0.0</ospf-area>
                <ospf-abr-count>0</ospf-abr-count>
                <ospf-asbr-count>1</ospf-asbr-count>
                <ospf-nbr-overview>
                    <ospf-nbr-up-count>2</ospf-nbr-up-count>
                </ospf-nbr-overview>
            </ospf-area-overview>
            <ospf-area-overview>
                <ospf-area>0.0.0.1</ospf-area>
                <ospf-abr-count>0</ospf-abr-count>
                <ospf-asbr-count>0</ospf-asbr-count>
                <ospf-nbr-overview>
                    <ospf-nbr-up-count>1</ospf-nbr-up-count>
                </ospf-nbr-overview>
            </ospf-area-overview>
        </ospf-overview>
    </ospf3-overview-information>
</rpc-reply>
"#;

pub const ISIS_ADJACENCY: &str = r#"<rpc-reply xmlns:junos="http://xml.juniper.net/junos/18.2R1/junos">
    <isis-adjacency-information xmlns="http://xml.juniper.net/junos/18.2R1/junos-routing" junos:style="brief">
        <isis-adjacency>
            <interface-name>ge-0/0/0.0</interface-name>
            <system-name>core1</system-name>
            <level>2</level>
            <adjacency-state>Up</adjacency-state>
            <holdtime>25</holdtime>
        </isis-adjacency>
        <isis-adjacency>
            <interface-name>ge-0/0/2.0</interface-name>
            <system-name>core2</system-name>
            <level>2</level>
            <adjacency-state>Up</adjacency-state>
            <holdtime>21</holdtime>
        </isis-adjacency>
        <isis-adjacency>
            <interface-name>ge-0/0/3.0</interface-name>
            <system-name>edge7</system-name>
            <level>2</level>
            <adjacency-state>Initializing</adjacency-state>
            <holdtime>6</holdtime>
        </isis-adjacency>
    </isis-adjacency-information>
</rpc-reply>
"#;

pub const ROUTE_SUMMARY: &str = r#"<rpc-reply xmlns:junos="http://xml.juniper.net/junos/18.2R1/junos">
    <route-summary-information xmlns="http://xml.juniper.net/junos/18.2R1/junos-routing">
        <as-number>65000</as-number>
        <router-id>10.0.0.1</router-id>
        <route-table>
            <table-name>inet.0</table-name>
            <destination-count>210</destination-count>
            <total-route-count>215</total-route-count>
            <active-route-count>160</active-route-count>
            <holddown-route-count>0</holddown-route-count>
            <hidden-route-count>0</hidden-route-count>
            <protocols>
                <protocol-name>Direct</protocol-name>
                <protocol-route-count>5</protocol-route-count>
                <active-route-count>5</active-route-count>
            </protocols>
            <protocols>
                <protocol-name>Local</protocol-name>
                <protocol-route-count>4</protocol-route-count>
                <active-route-count>4</active-route-count>
            </protocols>
            <protocols>
                <protocol-name>BGP</protocol-name>
                <protocol-route-count>200</protocol-route-count>
                <active-route-count>150</active-route-count>
            </protocols>
            <protocols>
                <protocol-name>Static</protocol-name>
                <protocol-route-count>6</protocol-route-count>
                <active-route-count>1</active-route-count>
            </protocols>
        </route-table>
        <route-table>
            <table-name>inet6.0</table-name>
            <destination-count>12</destination-count>
            <total-route-count>12</total-route-count>
            <active-route-count>12</active-route-count>
            <holddown-route-count>0</holddown-route-count>
            <hidden-route-count>0</hidden-route-count>
            <protocols>
                <protocol-name>Direct</protocol-name>
                <protocol-route-count>4</protocol-route-count>
                <active-route-count>4</active-route-count>
            </protocols>
            <protocols>
                <protocol-name>Local</protocol-name>
                <protocol-route-count>8</protocol-route-count>
                <active-route-count>8</active-route-count>
            </protocols>
        </route-table>
    </route-summary-information>
</rpc-reply>
"#;

pub const ROUTING_ENGINE: &str = r#"<rpc-reply xmlns:junos="http://xml.juniper.net/junos/18.2R1/junos">
    <route-engine-information xmlns="http://xml.juniper.net/junos/18.2R1/junos-chassis">
        <route-engine>
            <slot>0</slot>
            <mastership-state>master</mastership-state>
            <mastership-priority>master (default)</mastership-priority>
            <status>OK</status>
            <temperature junos:celsius="38">38 degrees C / 100 degrees F</temperature>
            <cpu-temperature junos:celsius="45">45 degrees C / 113 degrees F</cpu-temperature>
            <memory-dram-size>3584 MB</memory-dram-size>
            <memory-buffer-utilization>42</memory-buffer-utilization>
            <cpu-user>5</cpu-user>
            <cpu-background>0</cpu-background>
            <cpu-system>3</cpu-system>
            <cpu-interrupt>1</cpu-interrupt>
            <cpu-idle>91</cpu-idle>
            <model>RE-S-1800x4</model>
            <load-average-one>0.12</load-average-one>
            <load-average-five>0.20</load-average-five>
            <load-average-fifteen>0.18</load-average-fifteen>
        </route-engine>
        <route-engine>
            <slot>1</slot>
            <mastership-state>backup</mastership-state>
            <status>OK</status>
            <temperature junos:celsius="35">35 degrees C / 95 degrees F</temperature>
            <cpu-temperature junos:celsius="40">40 degrees C / 104 degrees F</cpu-temperature>
            <memory-buffer-utilization>12</memory-buffer-utilization>
            <cpu-user>0</cpu-user>
            <cpu-background>0</cpu-background>
            <cpu-system>1</cpu-system>
            <cpu-interrupt>0</cpu-interrupt>
            <cpu-idle>99</cpu-idle>
        </route-engine>
    </route-engine-information>
</rpc-reply>
"#;

pub const ENVIRONMENT: &str = r#"<rpc-reply xmlns:junos="http://xml.juniper.net/junos/18.2R1/junos">
    <environment-information xmlns="http://xml.juniper.net/junos/18.2R1/junos-chassis">
        <environment-item>
            <name>Routing Engine 0</name>
            <class>Temp</class>
            <status>OK</status>
            <temperature junos:celsius="37">37 degrees C / 98 degrees F</temperature>
        </environment-item>
        <environment-item>
            <name>Routing Engine 1</name>
            <class>Temp</class>
            <status>OK</status>
            <temperature junos:celsius="35">35 degrees C / 95 degrees F</temperature>
        </environment-item>
        <environment-item>
            <name>PEM 0</name>
            <class>Power</class>
            <status>OK</status>
        </environment-item>
        <environment-item>
            <name>FPC 0 Intake</name>
            <class>Temp</class>
            <status>OK</status>
            <temperature junos:celsius="30">30 degrees C / 86 degrees F</temperature>
        </environment-item>
        <environment-item>
            <name>FPC 0 Intake</name>
            <class>Temp</class>
            <status>OK</status>
            <temperature junos:celsius="33">33 degrees C / 91 degrees F</temperature>
        </environment-item>
    </environment-information>
</rpc-reply>
"#;

pub const OPTICS_DIAGNOSTICS: &str = r#"<rpc-reply xmlns:junos="http://xml.juniper.net/junos/18.2R1/junos">
    <interface-information xmlns="http://xml.juniper.net/junos/18.2R1/junos-interface-optics" junos:style="normal">
        <physical-interface>
            <name>xe-0/0/0</name>
            <optics-diagnostics>
                <laser-bias-current>6.526</laser-bias-current>
                <laser-output-power>0.5010</laser-output-power>
                <laser-output-power-dbm>-3.00</laser-output-power-dbm>
                <module-temperature junos:celsius="31.0">31 degrees C / 88 degrees F</module-temperature>
                <module-voltage>3.3140</module-voltage>
                <rx-signal-avg-optical-power>0.4544</rx-signal-avg-optical-power>
                <rx-signal-avg-optical-power-dbm>-3.43</rx-signal-avg-optical-power-dbm>
                <laser-bias-current-high-alarm>off</laser-bias-current-high-alarm>
            </optics-diagnostics>
        </physical-interface>
        <physical-interface>
            <name>xe-0/0/1</name>
            <optics-diagnostics>
                <optic-diagnostics-not-available>N/A</optic-diagnostics-not-available>
            </optics-diagnostics>
        </physical-interface>
        <physical-interface>
            <name>et-0/0/2</name>
            <optics-diagnostics>
                <laser-bias-current>0.000</laser-bias-current>
                <laser-output-power>0.0000</laser-output-power>
                <laser-output-power-dbm>- Inf</laser-output-power-dbm>
                <module-temperature junos:celsius="28">28 degrees C / 82 degrees F</module-temperature>
                <laser-rx-optical-power>0.3500</laser-rx-optical-power>
                <laser-rx-optical-power-dbm>-4.56</laser-rx-optical-power-dbm>
            </optics-diagnostics>
        </physical-interface>
    </interface-information>
</rpc-reply>
"#;

impl MockChannel {
    /// Creates a router that answers every domain command.
    ///
    /// Includes: two alarm sources, three physical interfaces (two with
    /// logical units), three BGP peers (one
    /// carrying two RIBs), two OSPF3 areas, three ISIS
    /// adjacencies, two routing tables, a dual routing engine, a duplicated
    /// environment sensor, and three optics ports (one without diagnostics).
    pub fn typical_router(host: impl Into<String>) -> Self {
        let mut channel = Self::new(host);

        let replies = [
            (commands::SYSTEM_ALARMS, SYSTEM_ALARMS),
            (commands::CHASSIS_ALARMS, CHASSIS_ALARMS),
            (commands::INTERFACES, INTERFACES),
            (commands::BGP, BGP_SUMMARY),
            (commands::OSPF, OSPF3_OVERVIEW),
            (commands::ISIS, ISIS_ADJACENCY),
            (commands::ROUTES, ROUTE_SUMMARY),
            (commands::ROUTING_ENGINE, ROUTING_ENGINE),
            (commands::ENVIRONMENT, ENVIRONMENT),
            (commands::INTERFACE_DIAGNOSTICS, OPTICS_DIAGNOSTICS),
        ];
        for (command, reply) in replies {
            channel.add_response(with_xml_output(command), reply);
        }

        channel
    }

    /// Creates a router that cannot be reached: every command fails to connect.
    pub fn unreachable(host: impl Into<String>) -> Self {
        let mut channel = Self::new(host);
        for command in commands::ALL {
            channel.fail_connect(with_xml_output(command), "ssh: connect to host: No route to host");
        }
        channel
    }
}
